#[macro_export]
macro_rules! log {
        ($($arg:tt)*) => {
        println!("[Info] {}", format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("[Warning] {}", format!($($arg)*))
    };
}

pub trait ProjectError: std::error::Error
{
    fn title(&self) -> String;

    /// Function for default handling an error
    ///
    /// Prints the error message framed to stderr, followed by its source chain
    fn handle(&self)
    {
        eprintln!("{:->50}", '-');
        eprintln!("[{} Error] {}", self.title(), self);
        let mut source = self.source();
        while let Some(err) = source {
            eprintln!("  caused by: {}", err);
            source = err.source();
        }
        eprintln!("{:->50}", '-');
    }
}
