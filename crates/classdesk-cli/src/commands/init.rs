//! The `classdesk init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    for (path, content) in [
        ("classdesk.toml", SAMPLE_CONFIG),
        ("studentMarks.txt", SAMPLE_MARKS),
        ("shortjokes.csv", SAMPLE_JOKES),
    ] {
        if Path::new(path).exists() {
            println!("{path} already exists, skipping.");
        } else {
            std::fs::write(path, content)?;
            println!("Created {path}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Replace studentMarks.txt with your class data");
    println!("  2. Run: classdesk list");
    println!("  3. Run: classdesk find <code or name>");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# classdesk configuration

students_file = "studentMarks.txt"
jokes_file = "shortjokes.csv"

[quiz]
max_questions = 10
default_difficulty = 1
"#;

const SAMPLE_MARKS: &str = "\
5
1345, John Curry, 8, 15, 7, 45
2345, Sam Sturtivant, 14, 15, 14, 77
9876, Lee Scott, 17, 11, 16, 99
3724, Matt Thompson, 19, 11, 15, 81
1212, Ron Herrema, 14, 17, 18, 66
";

const SAMPLE_JOKES: &str = r#"ID,Joke
1,"Why did the scarecrow win an award? Because he was outstanding in his field."
2,"What do you call a fake noodle? An impasta."
3,"Why don't skeletons fight each other? They don't have the guts."
"#;
