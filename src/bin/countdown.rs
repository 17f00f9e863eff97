//=========================================================================
// countdown
//=========================================================================
//
// Sample headless game: prints the step number each step and calls
// `end_game` on step N.
//
// Usage:
//   countdown [N|never]
//
// N defaults to 5. `never` keeps stepping until the driver gives up.
//
//=========================================================================

use std::process::ExitCode;

use headless_runtime::logging::{init_logging, LoggingConfig};
use headless_runtime::prelude::*;
use log::error;

//=== Countdown ===========================================================

struct Countdown {
    end_on: Option<u32>,
    step: u32,
    jingle: Handle<Sound>,
    ship: Handle<Image>,
}

impl Game for Countdown {
    fn create(&mut self, rt: &mut Runtime) {
        self.jingle = rt.load_sound("jingle.wav");
        self.ship = rt.load_image("ship.png");
        rt.loop_sound(self.jingle);
    }

    fn step(&mut self, rt: &mut Runtime) {
        self.step += 1;
        rt.print_int(i64::from(self.step));

        if self.end_on == Some(self.step) {
            rt.play_sound(self.jingle);
            rt.end_game();
        }
    }

    fn draw(&mut self, rt: &mut Runtime) {
        rt.set_sprite_position(self.ship, f64::from(self.step), 0.0);
        rt.draw_sprite(self.ship);
    }
}

//=== Argument Parsing ====================================================

fn parse_end_step(arg: Option<&str>) -> Result<Option<u32>, String> {
    match arg {
        None => Ok(Some(5)),
        Some("never") => Ok(None),
        Some(raw) => raw
            .parse::<u32>()
            .map(Some)
            .map_err(|e| format!("invalid step count {:?}: {}", raw, e)),
    }
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let arg = std::env::args().nth(1);
    let end_on = match parse_end_step(arg.as_deref()) {
        Ok(end_on) => end_on,
        Err(msg) => {
            error!("{}", msg);
            eprintln!("Usage: countdown [N|never]");
            return ExitCode::from(2);
        }
    };

    let game = Countdown {
        end_on,
        step: 0,
        jingle: Handle::unavailable(),
        ship: Handle::unavailable(),
    };

    DriverBuilder::new().build().run_to_exit(game)
}
