//! Interactive edit shell: drives an in-memory voxel world from JSON lines.
//!
//! Usage: cargo run --release --bin edit_shell -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Edit configuration file (default: edit_config.json)
//!   --floor <Y>       Lowest editable Y (default: 0)
//!   --ceiling <Y>     One past the highest editable Y (default: 256)
//!
//! Each stdin line is one request, for example:
//!   {"actor":1,"cmd":"Pos1","params":{"x":0,"y":0,"z":0}}
//!   {"actor":1,"cmd":"Set","params":{"content":"stone","mask":"air"}}
//!   {"actor":1,"cmd":"Undo"}
//!
//! One JSON response is written to stdout per request.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use stellaris_edit::session::{CommandExecutor, EditConfig, EditResponse};
use stellaris_edit::voxel::{GridWorld, Voxel};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let args: Vec<String> = std::env::args().collect();
    let config_path = parse_str_arg(&args, "--config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("edit_config.json"));
    let floor = parse_i32_arg(&args, "--floor").unwrap_or(0);
    let ceiling = parse_i32_arg(&args, "--ceiling").unwrap_or(256);

    if floor >= ceiling {
        log::error!("--floor ({}) must be below --ceiling ({})", floor, ceiling);
        std::process::exit(1);
    }

    let config = match EditConfig::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load {}: {}", config_path.display(), e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Edit shell: undo limit {}, max volume {}, {} materials, Y {}..{}",
        config.undo_limit,
        config.max_volume,
        config.materials.len(),
        floor,
        ceiling,
    );

    let mut world = GridWorld::new(Voxel::EMPTY, floor..ceiling);
    let mut executor = CommandExecutor::new(&config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut handled = 0usize;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("stdin read failed: {}", e);
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let start = Instant::now();
        let response = executor.handle_json(&mut world, line);
        log::debug!("Handled request in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);
        handled += 1;

        if let Err(e) = write_response(&mut stdout, &response) {
            log::error!("stdout write failed: {}", e);
            break;
        }
    }

    log::info!(
        "Edit shell done: {} requests, {} stored cells, {} writes",
        handled,
        world.stored_count(),
        world.write_count(),
    );
}

fn write_response(out: &mut impl Write, response: &EditResponse) -> io::Result<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    out.flush()
}

fn parse_i32_arg(args: &[String], flag: &str) -> Option<i32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
