use std::path::PathBuf;
use std::process::ExitCode;

use metatheme::framedraw::{FrameFlags, FrameGeometry, Rect, log_init};
use metatheme::mtheme::{FrameType, Theme};
use metatheme::{MetathemeError, Result, load_theme_file, preview};

const USAGE: &str = "usage: theme-viewer <theme-file> [client-width client-height]";

struct Args {
    path: PathBuf,
    width: i32,
    height: i32,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| MetathemeError::Usage(USAGE.to_string()))?;
    let mut size = args.map(|a| {
        a.parse::<i32>()
            .map_err(|_| MetathemeError::Usage(format!("invalid size \"{a}\"\n{USAGE}")))
    });
    let width = size.next().transpose()?.unwrap_or(400);
    let height = size.next().transpose()?.unwrap_or(300);
    Ok(Args {
        path: PathBuf::from(path),
        width,
        height,
    })
}

fn print_info(theme: &Theme) {
    let info = &theme.info;
    let field = |v: &Option<String>| v.clone().unwrap_or_default();
    println!("Theme:       {}", field(&info.readable_name));
    println!("Author:      {}", field(&info.author));
    println!("Copyright:   {}", field(&info.copyright));
    println!("Date:        {}", field(&info.date));
    println!("Description: {}", field(&info.description));
}

fn print_geometry(geometry: &FrameGeometry) {
    let rect = |r: Rect| format!("{},{} {}x{}", r.x, r.y, r.width, r.height);
    println!(
        "Frame {}x{} borders left {} right {} top {} bottom {}",
        geometry.width,
        geometry.height,
        geometry.left_width,
        geometry.right_width,
        geometry.top_height,
        geometry.bottom_height
    );
    println!("  title  {}", rect(geometry.title_rect));
    println!("  close  {}", rect(geometry.close_rect));
    println!("  max    {}", rect(geometry.max_rect));
    println!("  min    {}", rect(geometry.min_rect));
    println!("  menu   {}", rect(geometry.menu_rect));
    println!("  spacer {}", rect(geometry.spacer_rect));
}

fn run() -> Result<()> {
    let args = parse_args()?;
    log_init::init_logger("theme-viewer.log")?;

    let theme = load_theme_file(&args.path)?;
    print_info(&theme);

    let flags = FrameFlags::ALLOWS_DELETE
        | FrameFlags::ALLOWS_MENU
        | FrameFlags::ALLOWS_MINIMIZE
        | FrameFlags::ALLOWS_MAXIMIZE
        | FrameFlags::HAS_FOCUS;
    let frame = preview(&theme, FrameType::Normal, flags, args.width, args.height, "Window Title")?;

    println!();
    print_geometry(&frame.geometry);
    println!();
    println!("{}", frame.canvas.to_snapshot());
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
