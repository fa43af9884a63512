//! Several worker threads share one logger that writes to stdout and to
//! `logs/workers/<DD-MM-YYYY>.log`.
//!
//! cargo run --example workers
use std::thread;
use vslog::{Logger, Sinks};

fn main() {
    let logger = Logger::try_new(Sinks::CONSOLE_OUT | Sinks::FILE, "workers")
        .unwrap_or_else(|e| panic!("Logger initialization failed with {e}"));
    logger.info("starting workers");

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = logger.clone();
            thread::spawn(move || {
                for job in 0..3 {
                    if job == 2 && worker % 2 == 1 {
                        vslog::warningf!(logger, "worker {worker}: job {job} took too long");
                    } else {
                        vslog::infof!(logger, "worker {worker}: job {job} done");
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    if let Some(path) = logger.current_log_file() {
        logger.info(&format!("log was written to {}", path.display()));
    }
}
