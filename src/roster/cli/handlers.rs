use super::menu;
use super::print::{print_messages, print_students};
use roster::api::{CmdMessage, ConfigAction, RosterApi};
use roster::config::RosterPaths;
use roster::error::Result;
use roster::model::{NewStudent, StudentPatch};
use roster::store::fs::FsBackend;
use roster::store::LoadReport;
use std::io;

pub(super) struct AppContext {
    api: RosterApi<FsBackend>,
}

impl AppContext {
    pub(super) fn open(paths: RosterPaths) -> Result<Self> {
        let api = RosterApi::open(FsBackend::new(paths.data_file))?;

        if let LoadReport::Recovered { backup, .. } = api.load_report() {
            let mut notice = format!(
                "Malformed data in {}, starting with an empty roster.",
                api.data_path().display()
            );
            if let Some(path) = backup {
                notice.push_str(&format!(" The old file was copied to {}.", path.display()));
            }
            print_messages(&[CmdMessage::warning(notice)]);
        }

        Ok(Self { api })
    }
}

pub(super) fn handle_add(
    ctx: &mut AppContext,
    name: String,
    age: u32,
    major: String,
    gpa: f64,
    email: String,
) -> Result<()> {
    let result = ctx
        .api
        .add_student(NewStudent::new(name, age, major, gpa, email))?;
    print_students(&result.affected_students);
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_students()?;
    print_students(&result.listed_students);
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view_student(id)?;
    print_students(&result.listed_students);
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_update(
    ctx: &mut AppContext,
    id: &str,
    name: Option<String>,
    age: Option<u32>,
    major: Option<String>,
    gpa: Option<f64>,
    email: Option<String>,
) -> Result<()> {
    let patch = StudentPatch {
        name,
        age,
        major,
        gpa,
        email,
    };
    let found = ctx.api.view_student(id)?;
    if found.listed_students.is_empty() {
        print_messages(&found.messages);
        return Ok(());
    }
    if patch.is_empty() {
        print_messages(&[CmdMessage::info(
            "Nothing to update (use --name, --age, --major, --gpa or --email).",
        )]);
        return Ok(());
    }

    let result = ctx.api.update_student(id, &patch)?;
    print_students(&result.affected_students);
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_student(id)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search_students(query)?;
    print_students(&result.listed_students);
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut ctx.api, stdin.lock(), stdout.lock())
}

pub(super) fn handle_path(paths: &RosterPaths) -> Result<()> {
    println!("{}", paths.data_file.display());
    Ok(())
}

pub(super) fn handle_config(
    paths: &RosterPaths,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = roster::commands::config::run(paths, action)?;
    if let Some(config) = &result.config {
        for (key, value) in config.entries() {
            println!("{} = {}", key, value);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
