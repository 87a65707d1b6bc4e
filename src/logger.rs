/// Traces every outgoing request line when `RETRO_API_LOG` is set.
#[macro_export]
macro_rules! request_event {
    ($($arg:tt)*) => {
        if std::env::var("RETRO_API_LOG").is_ok() {
            println!(
                "\x1b[36m[HTTP] [{}]\x1b[0m {}",
                $crate::chrono::Utc::now().format("%H:%M:%S"),
                format!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! request_warn {
    ($($arg:tt)*) => {
        println!(
            "\x1b[35m[WARN] [{}]\x1b[0m {}",
            $crate::chrono::Utc::now().format("%H:%M:%S"),
            format!($($arg)*)
        )
    };
}
