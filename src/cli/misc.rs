use std::{fs::File, io::BufReader, path::Path};

use triad_sat::{builder::DimacsCounts, context::Context, types::err::{self}};

/// Errors when loading a formula from a file.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Build(err::ErrorKind),
    #[cfg(not(feature = "xz"))]
    Compressed,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Build(e) => write!(f, "{e}"),
            #[cfg(not(feature = "xz"))]
            Self::Compressed => write!(f, "xz compressed files require the xz feature"),
        }
    }
}

impl From<err::ErrorKind> for LoadError {
    fn from(e: err::ErrorKind) -> Self {
        LoadError::Build(e)
    }
}

/// Reads the DIMACS formula at `path` into the context, decompressing `.xz` files when the `xz` feature is enabled.
pub fn load_dimacs(context: &mut Context, path: &Path) -> Result<DimacsCounts, LoadError> {
    let file = File::open(path).map_err(LoadError::Io)?;

    match path.extension() {
        Some(extension) if extension == "xz" => {
            #[cfg(feature = "xz")]
            {
                let counts = context.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))?;
                Ok(counts)
            }

            #[cfg(not(feature = "xz"))]
            {
                Err(LoadError::Compressed)
            }
        }

        _ => Ok(context.read_dimacs(BufReader::new(&file))?),
    }
}
