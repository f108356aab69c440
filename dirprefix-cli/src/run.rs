use anyhow::{anyhow, Result};
use chrono::Local;
use dirprefix_core::{rename_tree, OutputFormat, OutputFormatter, RunResult};
use nu_ansi_term::Color::{Green, Red};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

/// Run the renamer on a background thread and drain its progress stream
/// live, the way an interactive front-end would.
pub fn handle_run(
    root: PathBuf,
    include_root_files: bool,
    quiet: bool,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let start = Instant::now();
    let (sender, receiver) = mpsc::channel::<String>();

    let worker_root = root.clone();
    let worker = thread::spawn(move || {
        let mut sink = sender;
        rename_tree(&worker_root, include_root_files, &mut sink)
    });

    // The engine drops its sender when the run finishes, ending this loop.
    // The loop owning the only worker is what keeps invocations one at a
    // time.
    for message in receiver {
        if quiet || output == OutputFormat::Json {
            continue;
        }
        print_progress(&message, use_color);
    }

    let total = worker
        .join()
        .map_err(|_| anyhow!("Rename worker panicked"))??;

    let result = RunResult {
        root,
        include_root_files,
        files_renamed: total,
        elapsed_secs: start.elapsed().as_secs_f64(),
    };

    let line = result.format(output);
    if output == OutputFormat::Summary && use_color {
        println!("{}", Green.paint(line));
    } else {
        println!("{line}");
    }

    Ok(())
}

fn print_progress(message: &str, use_color: bool) {
    let timestamp = Local::now().format("%H:%M:%S");
    if use_color && message.starts_with("ERROR:") {
        eprintln!("[{timestamp}] {}", Red.paint(message));
    } else {
        eprintln!("[{timestamp}] {message}");
    }
}
