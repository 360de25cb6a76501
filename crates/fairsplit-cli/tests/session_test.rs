use std::io::Cursor;

use fairsplit_calculator::ParticipantId;
use fairsplit_cli::cli::InteractiveArgs;
use fairsplit_cli::config::FairsplitConfig;
use fairsplit_cli::interactive;

fn run_script(script: &str) -> (fairsplit_calculator::Bill, String) {
    run_script_with(&InteractiveArgs::default(), script)
}

fn run_script_with(args: &InteractiveArgs, script: &str) -> (fairsplit_calculator::Bill, String) {
    let mut output = Vec::new();
    let bill = interactive(
        args,
        &FairsplitConfig::default(),
        Cursor::new(script.as_bytes().to_vec()),
        &mut output,
    )
    .unwrap();
    (bill, String::from_utf8(output).unwrap())
}

#[test]
fn edits_update_the_bill() {
    let (bill, output) = run_script(
        "name 1 Ann\namount 1 60\namount 2 40\nadd Cy Lee 20\nfee 12\ndiscount 2\nquit\n",
    );
    assert_eq!(bill.len(), 3);
    assert_eq!(bill.participants()[2].label, "Cy Lee");
    assert_eq!(bill.participants()[2].id, ParticipantId(3));
    let payments: Vec<i64> = bill.allocate().results.iter().map(|r| r.payment).collect();
    assert_eq!(payments, vec![65, 43, 22]);
    assert!(output.contains("Ann"));
}

#[test]
fn last_row_cannot_be_removed() {
    let (bill, output) = run_script("rm 1\nrm 1\n");
    assert_eq!(bill.len(), 1);
    assert_eq!(bill.participants()[0].id, ParticipantId(2));
    assert!(output.contains("A bill keeps at least one participant."));
}

#[test]
fn reset_requires_confirmation() {
    let (bill, output) = run_script("amount 1 10\nreset\nn\n");
    assert_eq!(bill.participants()[0].id, ParticipantId(1));
    assert!(output.contains("Reset cancelled."));

    let (bill, _) = run_script("amount 1 10\nreset\ny\n");
    let ids: Vec<ParticipantId> = bill.participants().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![ParticipantId(3), ParticipantId(4)]);
    assert!(bill.participants().iter().all(|p| p.is_blank()));
}

#[test]
fn bad_rows_and_commands_are_reported() {
    let (_, output) = run_script("amount 9 10\nrm zero\nfrobnicate\n");
    assert!(output.contains("No row '9'"));
    assert!(output.contains("No row 'zero'"));
    assert!(output.contains("Unknown command: 'frobnicate'"));
}

#[test]
fn export_prints_summary_text() {
    let (_, output) = run_script("amount 1 33\nfee 2\ndiscount 1\nexport\n");
    assert!(output.contains("Friend: $34\n"));
    assert!(output.contains("Total: $34\n"));
}

#[test]
fn add_reads_a_lone_number_as_the_amount() {
    let (bill, _) = run_script("add 60\nadd Dee\nadd Eve Ray 7.5\n");
    let added: Vec<(&str, String)> = bill.participants()[2..]
        .iter()
        .map(|p| (p.label.as_str(), p.nominal_amount.to_string()))
        .collect();
    assert_eq!(
        added,
        vec![("", "60".to_string()), ("Dee", String::new()), ("Eve Ray", "7.5".to_string())]
    );
}

#[test]
fn full_id_space_is_reported_and_the_session_continues() {
    let path = std::env::temp_dir().join(format!("fairsplit-{}-full-ids.json", std::process::id()));
    std::fs::write(&path, format!(r#"{{"participants":[{{"id":{},"amount":10}}]}}"#, u64::MAX)).unwrap();
    let args = InteractiveArgs { input: Some(path.clone()) };
    let (bill, output) = run_script_with(&args, "add Ann 5\nreset\ny\namount 1 12\n");
    std::fs::remove_file(&path).unwrap();

    assert!(output.contains("No participant ids left in this bill"));
    assert_eq!(bill.len(), 1);
    assert_eq!(bill.participants()[0].id, ParticipantId(u64::MAX));
    assert_eq!(bill.allocate().total_paid(), 12);
}
