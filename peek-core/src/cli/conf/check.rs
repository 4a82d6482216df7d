use crate::conf::{ConfigError, StoreKind, load_config};
use miette::Report;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ access log: {}", cfg.log_file.display());
            match cfg.store.mode {
                StoreKind::Persistent => {
                    println!("✔ persistent store: {}", cfg.store.path.display())
                }
                StoreKind::Ephemeral => println!("✔ ephemeral store"),
            }
            println!(
                "✔ refresh every {}s, counting {} requests",
                cfg.dashboard.refresh_interval_secs, cfg.dashboard.verb
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    if plain {
        eprintln!("{}", err);
        if let ConfigError::Validation { errors, .. } = &err {
            for e in errors {
                eprintln!("  - {}", e);
            }
        }
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "No config file found.\n\
             \n\
             Create one with:\n\
             \n\
             peek config init",
        ),

        ConfigError::Parse { .. } => Some(
            "A minimal config only needs the access log:\n\
             \n\
             log_file = \"/var/log/nginx/access.log\"",
        ),

        _ => None,
    }
}
