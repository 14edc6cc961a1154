use arrowmap::http_server::run_server;
use arrowmap::segment::reader::read_segments;
use arrowmap::style::style_from_config;
use std::env;
use std::path::Path;
use tini::Ini;

fn fail() -> ! {
    std::process::exit(1);
}

fn get_value_from_config(config: &Ini, section: &str, name: &str) -> String {
    match config.get(section, name) {
        Some(value) => value,
        _ => {
            eprintln!("Property {} is missing in section [{}]", name, section);
            fail();
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<_> = env::args().collect();

    if args.len() != 2 {
        let bin_name = args.first().map(String::as_str).unwrap_or("server");
        eprintln!("Usage: {} CONFIG", bin_name);
        fail();
    }

    let config_path = &args[1];
    let config = match Ini::from_file(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to parse config from {}: {}", config_path, err);
            fail();
        }
    };

    let server_address = get_value_from_config(&config, "http", "address");
    let segments_file = get_value_from_config(&config, "segments", "file");

    let style = match style_from_config(&config) {
        Ok(style) => style,
        Err(err) => {
            eprintln!("Invalid [style] section: {}", err);
            fail();
        }
    };

    let store = match read_segments(Path::new(&segments_file)) {
        Ok(store) => store,
        Err(err) => {
            for cause in err.chain() {
                eprintln!("{}", cause);
            }
            fail();
        }
    };

    if let Err(e) = run_server(&server_address, store, style) {
        for cause in e.chain() {
            eprintln!("{}", cause);
        }
        fail();
    }
}
