use std::{
    io,
    sync::{Mutex, OnceLock},
};

use kdam::{tqdm, Bar, BarExt};

/// Terminal loading indicator that log output is routed through, so log
/// lines are printed above the bar instead of over it.
pub struct WriteBar {
    bar: Mutex<Bar>,
    visible: Mutex<bool>,
}

impl WriteBar {
    pub fn new(desc: &str) -> Self {
        let bar = tqdm!(desc = desc.to_string(), total = 0, leave = false, unit = "req");
        WriteBar {
            bar: Mutex::new(bar),
            visible: Mutex::new(false),
        }
    }

    pub fn show(&self) -> io::Result<()> {
        self.set_visible(true)
    }

    pub fn hide(&self) -> io::Result<()> {
        self.set_visible(false)
    }

    pub fn is_visible(&self) -> bool {
        self.visible.lock().map(|v| *v).unwrap_or(false)
    }

    fn set_visible(&self, on: bool) -> io::Result<()> {
        let mut visible = self.visible.lock().map_err(|_| poisoned())?;
        if *visible == on {
            return Ok(());
        }
        let mut bar = self.bar.lock().map_err(|_| poisoned())?;
        if on {
            bar.refresh()?;
        } else {
            bar.clear()?;
        }
        *visible = on;
        Ok(())
    }
}

fn poisoned() -> io::Error {
    io::Error::other("loading bar lock poisoned")
}

impl io::Write for &WriteBar {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        if self.is_visible() {
            let mut lock = self.bar.lock().map_err(|_| poisoned())?;
            BarExt::write(&mut *lock, msg.as_ref().trim_end())?;
        } else {
            io::Write::write_all(&mut io::stderr(), buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(&mut io::stderr())
    }
}

/// The process-wide bar, shared by the tracing writer and the CLI surface.
pub fn loading_bar() -> &'static WriteBar {
    static BAR: OnceLock<WriteBar> = OnceLock::new();
    BAR.get_or_init(|| WriteBar::new("Loading"))
}
