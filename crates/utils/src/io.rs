use std::fs::File;
use std::io::{Read, Result, Write};
use std::path::Path;

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let mut content = String::new();
    match path {
        Some(path) => {
            File::open(path)?.read_to_string(&mut content)?;
        }
        None => {
            std::io::stdin().lock().read_to_string(&mut content)?;
        }
    }
    Ok(content)
}

/// Writes `content` to `path`, creating or truncating it, or to stdout when no
/// path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            File::create(path)?.write_all(content.as_bytes())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()
        }
    }
}
