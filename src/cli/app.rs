use std::{
    fs,
    io::{Read, Write},
    path::PathBuf,
};

#[cfg(test)]
use std::ffi::OsString;

use clap::{crate_version, Arg, ArgMatches};

use objview::object::Id;

use crate::Result;

pub(crate) fn clap_app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("objview")
        .version(crate_version!())
        .about("Decode a git loose object and print a readable report")
        .arg(
            Arg::with_name("git-dir")
                .long("git-dir")
                .takes_value(true)
                .default_value(".git")
                .help("Repository directory used when OBJECT is an object ID"),
        )
        .arg(
            Arg::with_name("object")
                .required(true)
                .value_name("OBJECT")
                .help("A 40-digit object ID, a path to a loose object file, or `-` for stdin"),
        )
}

pub(crate) struct App<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

impl<'a> App<'a> {
    pub fn run(&mut self) -> Result<()> {
        let matches = self.arg_matches.clone();
        // ^^ Ugh. Need an independent copy of matches so we can still pass
        // the App struct through to the reader below.

        let object = matches.value_of("object").unwrap();
        let git_dir = matches.value_of("git-dir").unwrap();
        // unwrap: "object" is required and "git-dir" has a default.

        let compressed = self.read_compressed_object(object, git_dir)?;
        let report = objview::describe(&compressed)?;

        for diagnostic in report.diagnostics() {
            writeln!(self.stderr, "warning: {}", diagnostic)?;
        }

        report.write_to(self.stdout)?;

        Ok(())
    }

    /// Fetch the compressed bytes named by the OBJECT argument: stdin for
    /// `-`, the loose-object file `<git-dir>/objects/<2>/<38>` for a
    /// 40-digit ID, a plain file path otherwise.
    fn read_compressed_object(&mut self, object: &str, git_dir: &str) -> Result<Vec<u8>> {
        if object == "-" {
            let mut buf = Vec::new();
            self.stdin.read_to_end(&mut buf)?;
            return Ok(buf);
        }

        let path = if Id::from_hex(object).is_ok() {
            let mut p = PathBuf::from(git_dir);
            p.push("objects");
            p.push(&object[..2]);
            p.push(&object[2..]);
            p
        } else {
            PathBuf::from(object)
        };

        Ok(fs::read(&path)?)
    }

    #[cfg(test)]
    pub fn run_with_stdin_and_args<I, T>(stdin: Vec<u8>, args: I) -> Result<(Vec<u8>, Vec<u8>)>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(|x| x.into()).collect();
        args.insert(0, OsString::from("objview"));

        let mut stdin = std::io::Cursor::new(stdin);
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        App {
            arg_matches: clap_app().get_matches_from_safe(args)?,
            stdin: &mut stdin,
            stdout: &mut stdout,
            stderr: &mut stderr,
        }
        .run()?;

        Ok((stdout, stderr))
    }

    #[cfg(test)]
    pub fn run_with_args<I, T>(args: I) -> Result<(Vec<u8>, Vec<u8>)>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        App::run_with_stdin_and_args(Vec::new(), args)
    }
}
