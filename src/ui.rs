// console output macros, shared by every module

#[doc(hidden)]
#[macro_export]
macro_rules! emit {
    ($stream:ident, $paint:ident, $($arg:tt)*) => {{
        use colored::Colorize;
        use std::io::Write;
        let _ = writeln!(std::io::$stream(), "{}", format!($($arg)*).$paint());
    }};
}

/// progress of the run (green, stdout)
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        $crate::emit!(stdout, green, $($arg)*)
    };
}

/// plain stdout line, or a blank line when called without arguments
#[macro_export]
macro_rules! info {
    () => {{
        use std::io::Write;
        let _ = writeln!(std::io::stdout());
    }};
    ($($arg:tt)*) => {
        $crate::emit!(stdout, normal, $($arg)*)
    };
}

/// secondary detail such as request bodies (dimmed, stdout)
#[macro_export]
macro_rules! detail {
    ($($arg:tt)*) => {
        $crate::emit!(stdout, dimmed, $($arg)*)
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        $crate::emit!(stderr, yellow, $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit!(stderr, red, $($arg)*)
    };
}

/// pluralise a count for log lines, eg. "1 update", "3 updates"
pub fn count(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}
