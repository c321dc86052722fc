use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match monitor_toolbox::AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = monitor_toolbox::logging::init(&config.logging) {
        eprintln!("failed to initialise logging: {err}");
        return ExitCode::FAILURE;
    }

    let presenter_factory = monitor_toolbox::PixelsPresenterFactory::new();
    let command = monitor_toolbox::RunGuiCommand::new(presenter_factory, config);

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "toolbox exited with an error");
            ExitCode::FAILURE
        }
    }
}
