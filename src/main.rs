use std::time::Instant;

use log::{error, info, warn, SetLoggerError};
use rand::Rng as _;
use thiserror::Error;

use pmaze::{
    algorithms::Generator,
    logging,
    maze::MazeError,
    settings::Settings,
    tracer::LogTracer,
};

#[derive(Error, Debug)]
enum DriverError {
    #[error("Failed to install logger: {0}")]
    Logger(#[from] SetLoggerError),
    #[error(transparent)]
    Maze(#[from] MazeError),
}

fn load_settings() -> Settings {
    let Some(path) = Settings::default_path() else {
        warn!("no preference directory, using default settings");
        return Settings::default();
    };

    match Settings::load(&path) {
        Ok(settings) => settings,
        Err(err) => {
            error!("{} ({:?}), using default settings", err, path);
            Settings::default()
        }
    }
}

fn main() -> Result<(), DriverError> {
    better_panic::install();
    logging::init(log::LevelFilter::Warn)?;

    let settings = load_settings();
    logging::get_logger().set_level(settings.get_log_level().into());

    let generator = Generator::default();
    let solver = settings.get_solver().solver();
    let size = settings.get_size();

    let mut round = 0;
    while settings.get_rounds().map_or(true, |rounds| round < rounds) {
        round += 1;

        let seed = settings
            .get_seed()
            .unwrap_or_else(|| rand::thread_rng().gen_range(1..=100_000));
        let mut grid = generator.generate_seeded(size, Some(seed), &mut LogTracer)?;
        info!("maze created with seed {}", seed);

        let start = Instant::now();
        let solved = solver.solve(&mut grid, &mut LogTracer);
        let elapsed = start.elapsed();

        if solved {
            info!("maze solved in {:.2} seconds!", elapsed.as_secs_f64());
        } else {
            warn!("maze can not be solved!");
        }
    }

    Ok(())
}
