use std::{
    env,
    error::Error,
    fmt::{self, Display, Formatter},
    fs, io,
    process::ExitCode,
};

use bone_proxy::{error::TransformError, protocol::color::Color};
use config::DemoConfig;
use log::{error, info};
use model::{player_skeleton, ModelView};

mod config;
mod model;

#[derive(Debug)]
enum DemoError {
    Io(io::Error),
    Config(serde_json::Error),
    Output(serde_json::Error),
    Transform(TransformError),
}

impl Display for DemoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::Io(err) => write!(f, "Failed to read config: {}", err),
            DemoError::Config(err) => write!(f, "Bad config: {}", err),
            DemoError::Output(err) => write!(f, "Failed to encode output: {}", err),
            DemoError::Transform(err) => write!(f, "Bad bone transform: {}", err),
        }
    }
}

impl Error for DemoError {}

impl From<io::Error> for DemoError {
    fn from(err: io::Error) -> Self {
        DemoError::Io(err)
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        DemoError::Config(err)
    }
}

impl From<TransformError> for DemoError {
    fn from(err: TransformError) -> Self {
        DemoError::Transform(err)
    }
}

fn load_config() -> Result<DemoConfig, DemoError> {
    match env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(DemoConfig::default()),
    }
}

fn emit(model: &mut ModelView) -> Result<usize, DemoError> {
    let output = model.take_output();
    let count = output.writes.len();
    if count > 0 {
        let line = serde_json::to_string(&output).map_err(DemoError::Output)?;
        println!("{}", line);
    }
    Ok(count)
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;
    let mut model = ModelView::new(player_skeleton(), config.model_scale, &config.proxy)?;
    let mut writes = emit(&mut model)?;

    model.equip_player_rig(config.skin.as_ref());
    writes += emit(&mut model)?;

    for tick in 0..config.ticks {
        model.tick()?;
        if tick == config.ticks / 2 {
            model.colorize(Color::from_rgb(0xFF7F7F));
        }
        writes += emit(&mut model)?;
    }

    model.set_invisible(true);
    writes += emit(&mut model)?;

    info!(
        "Model {} ran {} ticks with {} metadata batches",
        model.id(),
        config.ticks,
        writes
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
