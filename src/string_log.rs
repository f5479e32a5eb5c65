use std::{collections::VecDeque, sync::Arc};

use flexi_logger::writers::LogWriter;
use parking_lot::Mutex;

const DEFAULT_CAPACITY: usize = 500;

pub struct ArcStringLog {
    log: Arc<StringLog>,
}

impl ArcStringLog {
    pub fn new(log: Arc<StringLog>) -> Self {
        Self { log }
    }
}

/// In-memory log lines shown in the log panel. Oldest lines are dropped past `capacity`.
pub struct StringLog {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl StringLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        let mut lines = self.lines.lock();
        lines.push_back(line);
        while lines.len() > self.capacity {
            lines.pop_front();
        }
    }

    pub fn for_each<F>(&self, func: F)
    where
        F: FnMut(&String),
    {
        self.lines.lock().iter().for_each(func);
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }
}

impl LogWriter for ArcStringLog {
    fn write(
        &self,
        now: &mut flexi_logger::DeferredNow,
        record: &log::Record,
    ) -> std::io::Result<()> {
        let line = format!(
            "[{}] {} - {}",
            record.level().as_str().to_uppercase(),
            now.now().format("%Y-%m-%d %H:%M:%S"),
            record.args()
        );
        if record.level() == log::Level::Error {
            eprintln!("{}", line);
        }
        self.log.push(line);
        Ok(())
    }

    fn flush(&self) -> std::io::Result<()> {
        Ok(())
    }
}
