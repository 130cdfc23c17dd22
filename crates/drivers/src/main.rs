mod config;
mod logging;

use std::io;
use std::process::ExitCode;

use config::AppConfig;
use media_capture_adapters::{
    present_launch_outcome, present_pending_request, ExternalStorageLayout, FsDirectoryCreator,
    JsonActivityHost, SystemClock, TerminalDialogPresenter,
};
use media_capture_application::{ApplicationError, CaptureRequestHelper, MediaLauncher};
use media_capture_domain::{
    format_display_date, is_valid_image, MediaCapturePath, PendingRequest, RequestCode,
};
use tracing::info;

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::from_env();

    let launcher = build_media_launcher(&config);
    let command = parse_command(&args);
    match run_command(command, &launcher) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_media_launcher(config: &AppConfig) -> MediaLauncher {
    let layout =
        ExternalStorageLayout::new(config.storage_root.clone(), config.dcim_folder.clone());
    let helper = CaptureRequestHelper::new(
        Box::new(SystemClock),
        Box::new(layout.clone()),
        Box::new(FsDirectoryCreator),
    );
    MediaLauncher::new(
        helper,
        Box::new(layout),
        Box::new(JsonActivityHost::new(io::stdout())),
        Box::new(TerminalDialogPresenter::new(io::stdout())),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Validate { path: String },
    Date { epoch_millis: i64 },
    PickImage,
    PickVideo,
    TakePhoto,
    TakeVideo,
    Resolve { code: i32 },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    let Some(name) = args.get(1) else {
        return Err(CommandError::Usage("missing command".to_string()));
    };

    match name.as_str() {
        "validate" => {
            let path = args
                .get(2)
                .ok_or_else(|| CommandError::Usage("missing path".to_string()))?;
            Ok(Command::Validate { path: path.clone() })
        }
        "date" => {
            let raw = args
                .get(2)
                .ok_or_else(|| CommandError::Usage("missing epoch millis".to_string()))?;
            let epoch_millis = raw
                .parse::<i64>()
                .map_err(|_| CommandError::Usage(format!("invalid epoch millis: {raw}")))?;
            Ok(Command::Date { epoch_millis })
        }
        "pick-image" => Ok(Command::PickImage),
        "pick-video" => Ok(Command::PickVideo),
        "take-photo" => Ok(Command::TakePhoto),
        "take-video" => Ok(Command::TakeVideo),
        "resolve" => {
            let raw = args
                .get(2)
                .ok_or_else(|| CommandError::Usage("missing request code".to_string()))?;
            let code = raw
                .parse::<i32>()
                .map_err(|_| CommandError::Usage(format!("invalid request code: {raw}")))?;
            Ok(Command::Resolve { code })
        }
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    launcher: &MediaLauncher,
) -> Result<(), CommandError> {
    match command? {
        Command::Validate { path } => {
            println!("{path}\t{}", present_validity(is_valid_image(&path)));
            Ok(())
        }
        Command::Date { epoch_millis } => {
            println!("{}", format_display_date(epoch_millis));
            Ok(())
        }
        Command::PickImage => launch(launcher.launch_picture_library()),
        Command::PickVideo => launch(launcher.launch_video_library()),
        Command::TakeVideo => launch(launcher.launch_video_camera()),
        Command::TakePhoto => {
            let mut on_path_ready = |path: &MediaCapturePath| {
                info!(path = %path, "capture path ready");
            };
            let outcome = launcher
                .launch_camera(Some(&mut on_path_ready))
                .map_err(|error| CommandError::Runtime(format!("camera launch failed: {error}")))?;
            eprintln!("{}", present_launch_outcome(&outcome));
            Ok(())
        }
        Command::Resolve { code } => {
            let request_code = RequestCode::try_from(code)
                .map_err(|error| CommandError::Runtime(error.to_string()))?;
            println!("{code}\t{request_code:?}");
            Ok(())
        }
    }
}

fn launch(result: Result<PendingRequest, ApplicationError>) -> Result<(), CommandError> {
    let request = result.map_err(|error| CommandError::Runtime(format!("launch failed: {error}")))?;
    eprintln!("launched {}", present_pending_request(&request));
    Ok(())
}

fn present_validity(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}

fn print_usage() {
    println!("usage:");
    println!("  media-capture validate <path>");
    println!("  media-capture date <epoch_millis>");
    println!("  media-capture pick-image");
    println!("  media-capture pick-video");
    println!("  media-capture take-photo");
    println!("  media-capture take-video");
    println!("  media-capture resolve <request_code>");
}
