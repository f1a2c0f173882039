use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::SourceArgs;

impl ArgumentType for SourceArgs {
    type Error = Infallible;

    const REPEATABLE: bool = true;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let mut paths = Vec::new();
        if let Some(v) = val {
            // A leading `@` takes the rest of the value as one path, commas included.
            if let Some(path) = v.trim_start().strip_prefix('@') {
                if !path.is_empty() {
                    paths.push(path.to_string());
                }
            } else {
                paths.extend(
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                );
            }
        }

        Some(Ok(SourceArgs {
            paths,
            ..SourceArgs::default()
        }))
    }

    fn default_value() -> Option<Self> {
        Some(SourceArgs::default())
    }
}
