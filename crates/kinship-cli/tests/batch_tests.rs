//! Integration tests for kinship-cli
//!
//! Batch runs over the built-in Shan family, the way `kinship run` drives them.

use kinship_cli::cli::RunArgs;
use kinship_cli::commands::execute_run;
use kinship_cli::config::OutputFormat;
use kinship_cli::seed::{seed_tree, DEFAULT_SEED};
use kinship_cli::{Formatter, Session};
use std::fs;

fn shan_session() -> Session {
    Session::new(seed_tree(DEFAULT_SEED).unwrap())
}

fn plain() -> Formatter {
    Formatter::new(OutputFormat::Plain, false)
}

fn run(session: &mut Session, input: &str) -> Vec<String> {
    session.run_batch(input, &plain())
}

#[test]
fn test_queries_over_default_seed() {
    let mut session = shan_session();
    let output = run(
        &mut session,
        "get_relationship Aras siblings\n\
         get_relationship Anga son\n\
         get_relationship Anga daughter\n\
         get_relationship Vila father\n\
         get_relationship Vasa paternal-uncle\n\
         get_relationship Kriya paternal-aunt\n\
         get_relationship Yodhan maternal-aunt\n\
         get_relationship Lavnya maternal-uncle\n\
         get_relationship Satvy sister-in-law\n\
         get_relationship Asva sister-in-law\n",
    );

    assert_eq!(
        output,
        vec![
            "Chit Ish Vich Satya",
            "Chit Ish Vich Aras",
            "Satya",
            "Vich",
            "Vyas",
            "Atya",
            "Tritha",
            "Ahit",
            "Atya",
            "Krpi",
        ]
    );
}

#[test]
fn test_failures_are_reported_per_line() {
    let mut session = shan_session();
    let output = run(
        &mut session,
        "get_relationship Lavnya maternal-aunt\n\
         get_relationship Remus maternal-aunt\n\
         get_relationship Jnki brother-in-law\n\
         get_relationship Aras cousin\n\
         get_relationship Aras\n",
    );

    assert_eq!(
        output,
        vec![
            "NONE",
            "PERSON_NOT_FOUND",
            "NONE",
            "CONFIGURATION_ERROR",
            "INVALID_INPUT",
        ]
    );
}

#[test]
fn test_additions_then_queries() {
    let mut session = shan_session();
    let output = run(
        &mut session,
        "// additions\n\
         \n\
         add_child Chitra Aria Female\n\
         get_relationship Lavnya maternal-aunt\n\
         add_child Ish Dax male\n\
         add_spouse Ish Mira\n\
         add_child Mira Dax male\n\
         get_relationship Dax father\n\
         add_child Vila Ned male\n\
         get_relationship Ned mother\n",
    );

    assert_eq!(
        output,
        vec![
            "CHILD_ADDITION_SUCCEEDED",
            "Aria",
            "CHILD_ADDITION_FAILED",
            "SPOUSE_ADDITION_SUCCEEDED",
            "CHILD_ADDITION_SUCCEEDED",
            "Ish",
            "CHILD_ADDITION_FAILED",
            "PERSON_NOT_FOUND",
        ]
    );
}

#[test]
fn test_repeated_query_is_stable() {
    let mut session = shan_session();
    let output = run(
        &mut session,
        "get_relationship Chika siblings\nget_relationship Chika siblings\n",
    );
    assert_eq!(output, vec!["Vila", "Vila"]);
}

#[test]
fn test_json_batch_output() {
    let mut session = shan_session();
    let formatter = Formatter::new(OutputFormat::Json, false);
    let output = session.run_batch("get_relationship Vila father\n", &formatter);
    assert_eq!(output, vec![r#"[{"name":"Vich","gender":"male"}]"#]);
}

#[test]
fn test_run_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(
        &input,
        "get_relationship Vasa paternal-uncle\nget_relationship Remus mother\n",
    )
    .unwrap();

    let mut session = shan_session();
    let args = RunArgs {
        file: input.display().to_string(),
        output: Some(output.display().to_string()),
    };
    execute_run(args, &mut session, &Formatter::new(OutputFormat::Plain, true)).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "Vyas\nPERSON_NOT_FOUND\n");
}

#[test]
fn test_seed_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family.txt");
    fs::write(
        &path,
        "Queen:female-King:male\n    Ella:female\n    Finn:male\n",
    )
    .unwrap();

    let tree = seed_tree(&fs::read_to_string(&path).unwrap()).unwrap();
    let mut session = Session::new(tree);
    let output = run(&mut session, "get_relationship Ella brother\n");
    assert_eq!(output, vec!["Finn"]);
}

#[test]
fn test_additions_through_via_member() {
    let mut session = shan_session();
    let output = run(
        &mut session,
        "add_sister-in-law Arit Mina Jnki\n\
         get_relationship Arit sister-in-law\n\
         get_relationship Lavnya maternal-aunt\n\
         add_brother-in-law Vyas Ravi Atya\n\
         get_relationship Vyas brother-in-law\n\
         add_paternal-uncle Kriya Omi Vyas\n\
         get_relationship Kriya paternal-uncle\n\
         add_paternal-uncle Kriya Pip Krpi\n\
         get_relationship Pip father\n",
    );

    assert_eq!(
        output,
        vec![
            "SISTER_IN_LAW_ADDITION_SUCCEEDED",
            "Mina",
            "Mina",
            "BROTHER_IN_LAW_ADDITION_SUCCEEDED",
            "Ravi",
            "PATERNAL_UNCLE_ADDITION_SUCCEEDED",
            "Asva Omi",
            "PATERNAL_UNCLE_ADDITION_FAILED",
            "PERSON_NOT_FOUND",
        ]
    );
}

#[test]
fn test_unknown_via_member_is_not_found() {
    let mut session = shan_session();
    let output = run(
        &mut session,
        "add_sister-in-law Arit Zoe Nobody\n\
         add_maternal-uncle Lavnya Ugo male Nobody\n\
         get_relationship Zoe mother\n",
    );

    assert_eq!(
        output,
        vec!["PERSON_NOT_FOUND", "PERSON_NOT_FOUND", "PERSON_NOT_FOUND"]
    );
}
