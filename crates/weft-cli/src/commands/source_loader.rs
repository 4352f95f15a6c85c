use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Document text together with the name diagnostics refer to it by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    pub name: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input is required: use a FILE argument, `-` for stdin, or -s/--source")]
    Missing,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Inline text wins over a file; a file named `-` is stdin.
pub fn load_source(file: Option<&Path>, text: Option<&str>) -> Result<LoadedSource, LoadError> {
    if let Some(text) = text {
        return Ok(LoadedSource {
            name: "<inline>".to_string(),
            text: text.to_owned(),
        });
    }

    match file {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(LoadError::Missing),
    }
}

fn load_stdin() -> Result<LoadedSource, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedSource {
        name: "<stdin>".to_string(),
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<LoadedSource, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedSource {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}
