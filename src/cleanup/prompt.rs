//! Interactive questions asked by the artifact remover.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use console::style;

use crate::error::Result;

/// Answer to "remove all of them?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    /// Anything other than yes or no.
    Abort,
}

impl Confirmation {
    /// Parse a typed answer: `y`/`yes` and `n`/`no`, case-insensitive.
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Confirmation::Yes,
            "n" | "no" => Confirmation::No,
            _ => Confirmation::Abort,
        }
    }
}

/// Directory the artifact search starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootChoice {
    Current,
    Home,
    Custom(PathBuf),
    Abort,
}

impl RootChoice {
    /// Parse the menu answer `1`, `2` or `3`; `custom` supplies the path for `3`.
    pub fn parse(answer: &str, custom: impl FnOnce() -> Result<String>) -> Result<Self> {
        Ok(match answer.trim() {
            "1" => RootChoice::Current,
            "2" => RootChoice::Home,
            "3" => {
                let path = custom()?;
                let path = path.trim();
                if path.is_empty() {
                    RootChoice::Abort
                } else {
                    RootChoice::Custom(PathBuf::from(path))
                }
            }
            _ => RootChoice::Abort,
        })
    }
}

/// Source of answers for the artifact remover.
pub trait Prompt {
    /// Ask where to search, given the current directory.
    fn choose_root(&mut self, current: &Path) -> Result<RootChoice>;

    /// Ask whether `count` found artifacts should be removed.
    fn confirm_removal(&mut self, count: usize) -> Result<Confirmation>;
}

/// Asks on the terminal and reads answers from a line reader.
pub struct ConsolePrompt<R> {
    input: R,
}

impl ConsolePrompt<io::StdinLock<'static>> {
    /// Prompt reading from standard input.
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> ConsolePrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn read_answer(&mut self) -> Result<String> {
        print!("{}", style("-> ").cyan());
        io::stdout().flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }
}

impl<R: BufRead> Prompt for ConsolePrompt<R> {
    fn choose_root(&mut self, current: &Path) -> Result<RootChoice> {
        println!(
            "\n{}",
            style(format!(
                "Your current directory is {}. Do you want to:",
                current.display()
            ))
            .cyan()
            .bold()
        );
        println!("{}", style("  1. Use it").yellow());
        println!("{}", style("  2. Use your home directory").yellow());
        println!("{}", style("  3. Enter your own one").yellow());

        let answer = self.read_answer()?;
        RootChoice::parse(&answer, || self.read_answer())
    }

    fn confirm_removal(&mut self, count: usize) -> Result<Confirmation> {
        println!(
            "\n{} {} {}",
            style("There are").cyan().bold(),
            style(count).red().bold(),
            style("file(s) that can be deleted. Remove all of them? (y/n)")
                .cyan()
                .bold()
        );

        let answer = self.read_answer()?;
        Ok(Confirmation::parse(&answer))
    }
}

/// Answers yes to every confirmation and searches the current directory.
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn choose_root(&mut self, _current: &Path) -> Result<RootChoice> {
        Ok(RootChoice::Current)
    }

    fn confirm_removal(&mut self, _count: usize) -> Result<Confirmation> {
        Ok(Confirmation::Yes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_confirmation_parse() {
        assert_eq!(Confirmation::parse("y"), Confirmation::Yes);
        assert_eq!(Confirmation::parse("Y\n"), Confirmation::Yes);
        assert_eq!(Confirmation::parse("no"), Confirmation::No);
        assert_eq!(Confirmation::parse("N"), Confirmation::No);
        assert_eq!(Confirmation::parse("maybe"), Confirmation::Abort);
        assert_eq!(Confirmation::parse(""), Confirmation::Abort);
    }

    #[test]
    fn test_root_choice_parse() {
        let unused = || -> Result<String> { panic!("custom path should not be read") };
        assert_eq!(RootChoice::parse("1", unused).unwrap(), RootChoice::Current);
        assert_eq!(RootChoice::parse("2", unused).unwrap(), RootChoice::Home);
        assert_eq!(RootChoice::parse("4", unused).unwrap(), RootChoice::Abort);
        assert_eq!(
            RootChoice::parse("3", || Ok("/tmp/photos".to_string())).unwrap(),
            RootChoice::Custom(PathBuf::from("/tmp/photos"))
        );
        assert_eq!(
            RootChoice::parse("3", || Ok("  ".to_string())).unwrap(),
            RootChoice::Abort
        );
    }

    #[test]
    fn test_console_prompt_reads_lines() {
        let mut prompt = ConsolePrompt::new(Cursor::new("3\n/srv/share\ny\n"));

        assert_eq!(
            prompt.choose_root(Path::new("/home/me")).unwrap(),
            RootChoice::Custom(PathBuf::from("/srv/share"))
        );
        assert_eq!(prompt.confirm_removal(4).unwrap(), Confirmation::Yes);
    }
}
