mod test_utils;

use std::{
    collections::HashSet,
    thread::{self, JoinHandle},
};
use vslog::{Logger, Sinks};

// cargo test --test test_multi_threaded -- --nocapture
#[test]
fn two_concurrent_callers() {
    const N: usize = 200;
    let dir = test_utils::dir();
    let logger = Logger::builder(Sinks::FILE)
        .name("testlog_concurrent")
        .directory(dir.path())
        .try_build()
        .unwrap();

    let infos = N / 2;
    let errors = N - infos;
    let info_logger = logger.clone();
    let error_logger = logger.clone();
    let handles = vec![
        thread::spawn(move || {
            for i in 0..infos {
                vslog::infof!(info_logger, "concurrent info {i}");
            }
        }),
        thread::spawn(move || {
            for i in 0..errors {
                vslog::errorf!(error_logger, "concurrent error {i}");
            }
        }),
    ];
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = test_utils::read_lines(&logger.current_log_file().unwrap());
    assert_eq!(lines.len(), N);
    assert!(lines.iter().any(|l| l.contains("INFO | concurrent info")));
    assert!(lines.iter().any(|l| l.contains("ERROR | concurrent error")));
    for line in &lines {
        test_utils::split_line(line);
    }
}

const NO_OF_THREADS: usize = 8;
const NO_OF_LOGLINES_PER_THREAD: usize = 150;

#[test]
fn high_contention() {
    let dir = test_utils::dir();
    let logger = Logger::builder(Sinks::FILE)
        .name("testlog_contention")
        .directory(dir.path())
        .try_build()
        .unwrap();

    let worker_handles = start_worker_threads(&logger, NO_OF_THREADS);
    wait_for_workers_to_close(worker_handles);
    verify_logs(&logger);
}

// Starts given number of worker threads and lets each execute `do_work`
fn start_worker_threads(logger: &Logger, no_of_workers: usize) -> Vec<JoinHandle<()>> {
    (0..no_of_workers)
        .map(|thread_number| {
            let logger = logger.clone();
            thread::Builder::new()
                .name(thread_number.to_string())
                .spawn(move || do_work(&logger, thread_number))
                .unwrap()
        })
        .collect()
}

fn do_work(logger: &Logger, thread_number: usize) {
    for idx in 0..NO_OF_LOGLINES_PER_THREAD {
        if idx % 2 == 0 {
            logger.info(&format!("g{thread_number} info {idx}"));
        } else {
            logger.error(&format!("g{thread_number} error {idx}"));
        }
    }
}

fn wait_for_workers_to_close(worker_handles: Vec<JoinHandle<()>>) {
    for worker_handle in worker_handles {
        worker_handle
            .join()
            .unwrap_or_else(|e| panic!("Joining worker thread failed: {e:?}"));
    }
}

fn verify_logs(logger: &Logger) {
    let lines = test_utils::read_lines(&logger.current_log_file().unwrap());
    assert_eq!(lines.len(), NO_OF_THREADS * NO_OF_LOGLINES_PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        let (level, message) = test_utils::split_line(line);
        match level {
            "INFO" => assert!(message.contains(" info "), "irregular line {line:?}"),
            "ERROR" => assert!(message.contains(" error "), "irregular line {line:?}"),
            _ => panic!("unexpected level in {line:?}"),
        }
        assert!(seen.insert(message.to_string()), "duplicate line {line:?}");
    }

    // the lines of each thread appear in the order in which the thread wrote them
    for thread_number in 0..NO_OF_THREADS {
        let prefix = format!("g{thread_number} ");
        let indices: Vec<usize> = lines
            .iter()
            .map(|l| test_utils::split_line(l).1)
            .filter(|m| m.starts_with(&prefix))
            .map(|m| m.rsplit(' ').next().unwrap().parse().unwrap())
            .collect();
        let expected: Vec<usize> = (0..NO_OF_LOGLINES_PER_THREAD).collect();
        assert_eq!(indices, expected);
    }
}
