//! Interactive menu loop.
//!
//! Generic over the input and output streams so the whole loop can be driven
//! from a script in tests. Output is plain text; colors are only used by the
//! one-shot subcommands.

use super::print::format_student;
use roster::api::RosterApi;
use roster::error::Result;
use roster::model::{NewStudent, StudentPatch};
use roster::store::StorageBackend;
use std::io::{BufRead, Write};

const MENU: &str = "
Student Record System
1) List students
2) Add student
3) View student
4) Update student
5) Delete student
6) Search by name
7) Exit
";

enum Flow {
    Continue,
    Quit,
}

/// Line-oriented prompting. Every read returns `None` once input is exhausted.
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn line(&mut self, label: &str, default: Option<&str>) -> Result<Option<String>> {
        match default {
            Some(d) => write!(self.output, "{} [{}]: ", label, d)?,
            None => write!(self.output, "{}: ", label)?,
        }
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let value = buf.trim().to_string();
        match default {
            Some(d) if value.is_empty() => Ok(Some(d.to_string())),
            _ => Ok(Some(value)),
        }
    }

    fn int(&mut self, label: &str, default: Option<u32>) -> Result<Option<u32>> {
        let default = default.map(|d| d.to_string());
        loop {
            let Some(raw) = self.line(label, default.as_deref())? else {
                return Ok(None);
            };
            match raw.parse::<u32>() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => self.say("Please enter a valid non-negative integer.")?,
            }
        }
    }

    fn float(&mut self, label: &str, default: Option<f64>) -> Result<Option<f64>> {
        let default = default.map(|d| format!("{:?}", d));
        loop {
            let Some(raw) = self.line(label, default.as_deref())? else {
                return Ok(None);
            };
            match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => return Ok(Some(v)),
                _ => self.say("Please enter a valid number.")?,
            }
        }
    }
}

/// Run the menu until the user exits or input ends.
pub fn run<B, R, W>(api: &mut RosterApi<B>, input: R, output: W) -> Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let mut p = Prompter { input, output };

    loop {
        p.say(MENU)?;
        let Some(choice) = p.line("Choose option", None)? else {
            break;
        };

        let outcome = match choice.as_str() {
            "1" => list(api, &mut p),
            "2" => add(api, &mut p),
            "3" => view(api, &mut p),
            "4" => update(api, &mut p),
            "5" => delete(api, &mut p),
            "6" => search(api, &mut p),
            c if c == "7" || c.eq_ignore_ascii_case("q") || c.eq_ignore_ascii_case("exit") => {
                p.say("Goodbye.")?;
                break;
            }
            _ => {
                p.say("Unknown option.")?;
                Ok(Flow::Continue)
            }
        };

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            // Keep the session alive; the store has already rolled back.
            Err(e) => {
                log::debug!("Menu action failed: {:?}", e);
                p.say(&format!("Error: {}", e))?;
            }
        }
    }
    Ok(())
}

fn list<B: StorageBackend, R: BufRead, W: Write>(
    api: &RosterApi<B>,
    p: &mut Prompter<R, W>,
) -> Result<Flow> {
    let result = api.list_students()?;
    if result.listed_students.is_empty() {
        p.say("No students found.")?;
    }
    for student in &result.listed_students {
        write!(p.output, "{}", format_student(student))?;
    }
    Ok(Flow::Continue)
}

fn add<B: StorageBackend, R: BufRead, W: Write>(
    api: &mut RosterApi<B>,
    p: &mut Prompter<R, W>,
) -> Result<Flow> {
    let Some(name) = p.line("Name", None)? else {
        return Ok(Flow::Quit);
    };
    let Some(age) = p.int("Age", None)? else {
        return Ok(Flow::Quit);
    };
    let Some(major) = p.line("Major", None)? else {
        return Ok(Flow::Quit);
    };
    let Some(gpa) = p.float("GPA", None)? else {
        return Ok(Flow::Quit);
    };
    let Some(email) = p.line("Email", None)? else {
        return Ok(Flow::Quit);
    };

    let result = api.add_student(NewStudent::new(name, age, major, gpa, email))?;
    p.say("Added student:")?;
    for student in &result.affected_students {
        write!(p.output, "{}", format_student(student))?;
    }
    Ok(Flow::Continue)
}

fn view<B: StorageBackend, R: BufRead, W: Write>(
    api: &RosterApi<B>,
    p: &mut Prompter<R, W>,
) -> Result<Flow> {
    let Some(id) = p.line("Student ID", None)? else {
        return Ok(Flow::Quit);
    };
    let result = api.view_student(&id)?;
    match result.listed_students.first() {
        Some(student) => write!(p.output, "{}", format_student(student))?,
        None => p.say("Student not found.")?,
    }
    Ok(Flow::Continue)
}

fn update<B: StorageBackend, R: BufRead, W: Write>(
    api: &mut RosterApi<B>,
    p: &mut Prompter<R, W>,
) -> Result<Flow> {
    let Some(id) = p.line("Student ID to update", None)? else {
        return Ok(Flow::Quit);
    };
    let Some(current) = api.view_student(&id)?.listed_students.into_iter().next() else {
        p.say("Student not found.")?;
        return Ok(Flow::Continue);
    };

    let Some(name) = p.line("Name", Some(&current.name))? else {
        return Ok(Flow::Quit);
    };
    let Some(age) = p.int("Age", Some(current.age))? else {
        return Ok(Flow::Quit);
    };
    let Some(major) = p.line("Major", Some(&current.major))? else {
        return Ok(Flow::Quit);
    };
    let Some(gpa) = p.float("GPA", Some(current.gpa))? else {
        return Ok(Flow::Quit);
    };
    let Some(email) = p.line("Email", Some(&current.email))? else {
        return Ok(Flow::Quit);
    };

    let patch = StudentPatch::new()
        .name(name)
        .age(age)
        .major(major)
        .gpa(gpa)
        .email(email);
    let result = api.update_student(&current.id, &patch)?;
    match result.affected_students.first() {
        Some(student) => {
            p.say("Updated:")?;
            write!(p.output, "{}", format_student(student))?;
        }
        None => p.say("Student not found.")?,
    }
    Ok(Flow::Continue)
}

fn delete<B: StorageBackend, R: BufRead, W: Write>(
    api: &mut RosterApi<B>,
    p: &mut Prompter<R, W>,
) -> Result<Flow> {
    let Some(id) = p.line("Student ID to delete", None)? else {
        return Ok(Flow::Quit);
    };
    let result = api.delete_student(&id)?;
    if result.affected_students.is_empty() {
        p.say("Student not found.")?;
    } else {
        p.say("Deleted.")?;
    }
    Ok(Flow::Continue)
}

fn search<B: StorageBackend, R: BufRead, W: Write>(
    api: &RosterApi<B>,
    p: &mut Prompter<R, W>,
) -> Result<Flow> {
    let Some(query) = p.line("Search query (name)", None)? else {
        return Ok(Flow::Quit);
    };
    let result = api.search_students(&query)?;
    if result.listed_students.is_empty() {
        p.say("No matches.")?;
    }
    for student in &result.listed_students {
        write!(p.output, "{}", format_student(student))?;
    }
    Ok(Flow::Continue)
}
