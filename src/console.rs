//! Visibility of the launcher's own console window.
//!
//! Only Windows has a console window to hide; elsewhere [`HostConsole`] does
//! nothing and reports [`Visibility::Unknown`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
    /// No console window is attached, or the host has none.
    Unknown,
}

pub trait ConsoleControl {
    fn set_visibility(&self, visibility: Visibility);
    fn visibility(&self) -> Visibility;

    fn hide(&self) {
        self.set_visibility(Visibility::Hidden);
    }
}

/// The console window of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostConsole;

#[cfg(windows)]
mod imp {
    use super::Visibility;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::System::Console::GetConsoleWindow;
    use windows::Win32::UI::WindowsAndMessaging::{IsWindowVisible, SW_HIDE, SW_SHOW, ShowWindow};

    fn console_window() -> Option<HWND> {
        let hwnd = unsafe { GetConsoleWindow() };
        if hwnd.0.is_null() { None } else { Some(hwnd) }
    }

    pub fn set_visibility(visibility: Visibility) {
        let Some(hwnd) = console_window() else {
            tracing::debug!("no console window attached");
            return;
        };
        let cmd = match visibility {
            Visibility::Shown => SW_SHOW,
            Visibility::Hidden => SW_HIDE,
            Visibility::Unknown => return,
        };
        // Return value is the previous visibility, not an error.
        let _ = unsafe { ShowWindow(hwnd, cmd) };
    }

    pub fn visibility() -> Visibility {
        match console_window() {
            Some(hwnd) if unsafe { IsWindowVisible(hwnd) }.as_bool() => Visibility::Shown,
            Some(_) => Visibility::Hidden,
            None => Visibility::Unknown,
        }
    }
}

#[cfg(not(windows))]
mod imp {
    use super::Visibility;

    pub fn set_visibility(_visibility: Visibility) {}

    pub fn visibility() -> Visibility {
        Visibility::Unknown
    }
}

impl ConsoleControl for HostConsole {
    fn set_visibility(&self, visibility: Visibility) {
        imp::set_visibility(visibility);
    }

    fn visibility(&self) -> Visibility {
        imp::visibility()
    }
}
