// Author: Dustin Pilgrim
// License: MIT

//! Command-line surface:
//!
//! ```text
//! yaml-merge [--src SRC [--srcPath PATH] [--targetPath PATH]]... TARGET_FILE
//! ```
//!
//! Each `--src` opens a group; `--srcPath` and `--targetPath` apply to the
//! group they follow. clap does not group repeated options itself, so the
//! groups are rebuilt from the argument indices it records.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info};

use crate::MergeError;
use crate::document::{Document, expand_home};

pub const ROOT_PATH: &str = "$.";

/// One `--src` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub src: String,
    pub src_path: Option<String>,
    pub target_path: Option<String>,
}

impl SourceSpec {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            src_path: None,
            target_path: None,
        }
    }

    pub fn src_path(&self) -> &str {
        self.src_path.as_deref().unwrap_or(ROOT_PATH)
    }

    pub fn target_path(&self) -> &str {
        self.target_path.as_deref().unwrap_or(ROOT_PATH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    pub sources: Vec<SourceSpec>,
    pub target_file: PathBuf,
    pub dry_run: bool,
    pub verbosity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Merge(MergePlan),
    /// `--help` / `--version` text, to be printed as-is.
    Info(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Src,
    SrcPath,
    TargetPath,
}

impl Flag {
    const ALL: [Flag; 3] = [Flag::Src, Flag::SrcPath, Flag::TargetPath];

    fn id(self) -> &'static str {
        match self {
            Flag::Src => "src",
            Flag::SrcPath => "srcPath",
            Flag::TargetPath => "targetPath",
        }
    }
}

pub fn command() -> Command {
    Command::new("yaml-merge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Deep-merge YAML/JSON sources into a YAML file")
        .arg(
            Arg::new(Flag::Src.id())
                .long(Flag::Src.id())
                .value_name("SRC")
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .help("Source to merge: a YAML file path, inline YAML or inline JSON"),
        )
        .arg(
            Arg::new(Flag::SrcPath.id())
                .long(Flag::SrcPath.id())
                .value_name("PATH")
                .action(ArgAction::Append)
                .help("Path within the preceding source to merge (default: whole source)"),
        )
        .arg(
            Arg::new(Flag::TargetPath.id())
                .long(Flag::TargetPath.id())
                .value_name("PATH")
                .action(ArgAction::Append)
                .help("Path in the target to merge the preceding source at (default: root)"),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Print the merged YAML instead of writing TARGET_FILE"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (overridden by YAML_MERGE_LOG)"),
        )
        .arg(
            Arg::new("target")
                .value_name("TARGET_FILE")
                .index(1)
                .help("File to merge into; a missing file counts as an empty document"),
        )
}

pub fn usage() -> String {
    command().render_help().to_string()
}

/// Parse process arguments (including the program name) into an invocation.
///
/// # Errors
/// `CliUsage` for unknown flags, `--srcPath`/`--targetPath` without a
/// preceding `--src`, a path flag repeated within one group, no sources, or
/// no target file.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, MergeError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(Invocation::Info(e.to_string()));
        }
        Err(e) => {
            let rendered = e.to_string();
            let message = rendered.lines().next().unwrap_or_default();
            return Err(MergeError::cli_usage(message.trim_start_matches("error: ")));
        }
    };

    let sources = group_sources(&matches)?;
    if sources.is_empty() {
        return Err(MergeError::cli_usage("No sources"));
    }
    let target = matches
        .get_one::<String>("target")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| MergeError::cli_usage("No target file"))?;

    Ok(Invocation::Merge(MergePlan {
        sources,
        target_file: expand_home(target),
        dry_run: matches.get_flag("dry_run"),
        verbosity: matches.get_count("verbose"),
    }))
}

fn group_sources(matches: &ArgMatches) -> Result<Vec<SourceSpec>, MergeError> {
    let mut flags: Vec<(usize, Flag, String)> = Vec::new();
    for flag in Flag::ALL {
        if let (Some(indices), Some(values)) =
            (matches.indices_of(flag.id()), matches.get_many::<String>(flag.id()))
        {
            flags.extend(indices.zip(values).map(|(i, v)| (i, flag, v.clone())));
        }
    }
    flags.sort_by_key(|(index, ..)| *index);

    let mut sources: Vec<SourceSpec> = Vec::new();
    for (_, flag, value) in flags {
        if flag == Flag::Src {
            sources.push(SourceSpec::new(value));
            continue;
        }
        let current = sources.last_mut().ok_or_else(|| {
            MergeError::cli_usage(format!("--{} without matching --src argument", flag.id()))
        })?;
        let slot = if flag == Flag::SrcPath {
            &mut current.src_path
        } else {
            &mut current.target_path
        };
        if slot.is_some() {
            return Err(MergeError::cli_usage(format!(
                "--{} redeclared for one of sources",
                flag.id()
            )));
        }
        *slot = Some(value);
    }
    Ok(sources)
}

/// Load the target and merge every source into it, in order, in memory.
pub fn build(plan: &MergePlan) -> Result<Document, MergeError> {
    let mut target = if plan.target_file.exists() {
        Document::from_file(&plan.target_file)?
    } else {
        debug!(path = %plan.target_file.display(), "target file missing, starting empty");
        Document::new()
    };

    for (n, spec) in plan.sources.iter().enumerate() {
        let source = Document::from_input(&spec.src)?;
        let extracted = source.get(spec.src_path())?;
        info!(
            source = n + 1,
            src_path = spec.src_path(),
            target_path = spec.target_path(),
            "merging source"
        );
        target.merge_value(&extracted, spec.target_path())?;
    }
    Ok(target)
}

/// Execute a plan. TARGET_FILE is only touched once every merge succeeded;
/// with `dry_run` the result goes to `out` instead.
pub fn run<W: Write>(plan: &MergePlan, out: &mut W) -> Result<(), MergeError> {
    let merged = build(plan)?;
    if plan.dry_run {
        let text = merged.to_yaml_string()?;
        return out.write_all(text.as_bytes()).map_err(|e| MergeError::FileError {
            message: format!("Failed to write output: {}", e),
            path: "<stdout>".into(),
            hint: None,
            code: Some(302),
        });
    }
    merged.write_file(&plan.target_file)
}

/// Process exit status for an error: 2 for usage errors, 1 otherwise.
pub fn exit_code(err: &MergeError) -> u8 {
    if err.is_usage() { 2 } else { 1 }
}

#[cfg(test)]
mod tests;
