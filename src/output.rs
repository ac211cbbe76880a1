use crate::types::GitHubRepo;
use std::io::Write;

pub const SEPARATOR: &str = "========================================";

pub fn write_repo<W: Write>(out: &mut W, repo: &GitHubRepo) -> std::io::Result<()> {
    writeln!(out, "Name: {}", repo.name)?;
    writeln!(out, "Description: {}", repo.description)?;
    writeln!(out, "Repository: {}", repo.html_url)?;
    writeln!(out, "{}", SEPARATOR)
}

/// One block per repository, in the given order.
pub fn write_repos<W: Write>(out: &mut W, repos: &[GitHubRepo]) -> std::io::Result<()> {
    for repo in repos {
        write_repo(out, repo)?;
    }
    out.flush()
}
