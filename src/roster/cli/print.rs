use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::model::Student;

const RULE_WIDTH: usize = 40;

/// Record block shared by the subcommands and the interactive menu.
pub(super) fn format_student(student: &Student) -> String {
    format!(
        "ID   : {}\nName : {}\nAge  : {}\nMajor: {}\nGPA  : {:?}\nEmail: {}\n{}\n",
        student.id,
        student.name,
        student.age,
        student.major,
        student.gpa,
        student.email,
        "-".repeat(RULE_WIDTH)
    )
}

pub(super) fn print_students(students: &[Student]) {
    for student in students {
        print!("{}", format_student(student));
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_record_block() {
        let student = Student {
            id: "abc".into(),
            name: "Ada Lovelace".into(),
            age: 30,
            major: "Math".into(),
            gpa: 4.0,
            email: "ada@example.com".into(),
        };
        let expected = format!(
            "ID   : abc\nName : Ada Lovelace\nAge  : 30\nMajor: Math\nGPA  : 4.0\nEmail: ada@example.com\n{}\n",
            "-".repeat(40)
        );
        assert_eq!(format_student(&student), expected);
    }
}
