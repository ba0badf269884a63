pub mod cli;
pub mod input;

pub use self::input::Input;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::Input;
    pub use anyhow::Result;
}

/// Input processing.
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<Input> {
    use anyhow::{anyhow, Context};
    use std::fs::File;
    use std::io::Read;

    return inner(read_path).with_context(|| anyhow!("{path}"));

    fn inner(read_path: &str) -> anyhow::Result<Input> {
        let mut file = File::open(read_path)?;
        let mut buf = String::with_capacity(4096);
        file.read_to_string(&mut buf)?;
        let data = Box::leak(buf.into_boxed_str());
        Ok(Input::new(data.as_bytes()))
    }
}

/// Prepare an input processor over `inputs/<path>`, resolved relative to the
/// manifest directory of the calling crate.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::input(path, read_path)?, path)
    }};
}
