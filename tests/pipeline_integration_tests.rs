//! End-to-end tests for the abbreviation pipeline: names file and score table in,
//! output file out.

use name_abbrev::abbreviation::{
    Name, ScoreTable, abbreviate_roster, candidate_count, generate_candidates, score_name,
};
use name_abbrev::error::AppError;
use name_abbrev::roster::{parse_names, read_names, read_report, write_report};
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

/// Scrabble-like base scores covering A-Z.
const VALUES: &str = "\
A 25
B 8
C 8
D 9
E 35
F 7
G 9
H 7
I 25
J 3
K 6
L 15
M 8
N 15
O 20
P 8
Q 1
R 15
S 15
T 15
U 20
V 7
W 7
X 3
Y 7
Z 1
";

fn values_table() -> ScoreTable {
    ScoreTable::parse(VALUES, "values.txt").unwrap()
}

#[test]
fn test_ann_scenario_end_to_end() {
    let table = ScoreTable::from_entries([('A', 1), ('N', 5)]);
    let results = abbreviate_roster(&parse_names("Ann\n"), &table).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].original, "Ann");
    assert_eq!(results[0].best, vec!["ANN"]);
}

#[test]
fn test_candidate_counts_over_a_roster() {
    let table = values_table();
    for name in parse_names("Cold\nSilver Birch\nA\nOx\nDevil's Walking Stick\n") {
        let candidates = generate_candidates(&score_name(&name, &table).unwrap());
        assert_eq!(
            candidates.len(),
            candidate_count(name.letter_count()),
            "{}",
            name.original()
        );
        if name.letter_count() <= 2 {
            assert!(candidates.is_empty());
        }
    }
}

#[test]
fn test_surviving_abbreviations_are_unique_to_one_name() {
    let table = values_table();
    let roster = parse_names("Red Oak\nRed Maple\nRed Pine\nRowan\nRedwood\n");

    let results = abbreviate_roster(&roster, &table).unwrap();

    let mut seen = HashSet::new();
    for result in &results {
        for abbreviation in &result.best {
            assert!(seen.insert(abbreviation.clone()), "{abbreviation} reused");
            assert_eq!(abbreviation.len(), 3);
            assert!(abbreviation.starts_with('R'));
        }
    }
}

#[test]
fn test_golden_roster_with_shared_abbreviations() {
    let roster = parse_names("Ann\nAnne\nTom Lee\nLark\nLake\n");
    let results = abbreviate_roster(&roster, &values_table()).unwrap();

    let best: Vec<(&str, Vec<&str>)> = results
        .iter()
        .map(|r| (r.original.as_str(), r.best.iter().map(String::as_str).collect()))
        .collect();

    // Ann:  ANN 16+5
    // Anne: ANN 16+17, ANE 16+20, ANE 17+20 -> ANN shared with Ann, falls back to ANE
    // Tom Lee: letters T0 o21 m5 L0 e36 e20, TML = 5+0 is cheapest
    // Lark: LAR 26+17, LAK 26+5, LRK 17+5
    // Lake: LAK 26+8, LAE 26+20, LKE 8+20 -> LAK shared with Lark
    assert_eq!(
        best,
        vec![
            ("Ann", vec![]),
            ("Anne", vec!["ANE"]),
            ("Tom Lee", vec!["TML"]),
            ("Lark", vec!["LRK"]),
            ("Lake", vec!["LKE"]),
        ]
    );
}

#[test]
fn test_extreme_scores_do_not_overflow() {
    let mut entries: Vec<(char, i32)> = ('A'..='Z').map(|letter| (letter, 1)).collect();
    entries.push(('N', i32::MAX));
    let table = ScoreTable::from_entries(entries);

    // Anna: A0 n(MAX+1) n(MAX+2) a5
    let results = abbreviate_roster(&parse_names("Anna\n"), &table).unwrap();
    assert_eq!(results[0].best, vec!["ANA"]);
}

#[test]
fn test_extreme_score_from_table_file() {
    let table = ScoreTable::parse("A 1\nN 2147483647\n", "values.txt").unwrap();
    let results = abbreviate_roster(&parse_names("Annan\n"), &table).unwrap();
    assert_eq!(results.len(), 1);
    assert!(!results[0].best.is_empty());
}

#[test]
fn test_identical_names_both_end_empty() {
    let results = abbreviate_roster(&parse_names("Elm\nElm\nAsh\n"), &values_table()).unwrap();
    assert!(results[0].best.is_empty());
    assert!(results[1].best.is_empty());
    assert_eq!(results[2].best, vec!["ASH"]);
}

#[test]
fn test_empty_names_keep_their_line() {
    let results = abbreviate_roster(&parse_names("Oak\n\n--\nAsh\n"), &values_table()).unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(results[1].original, "");
    assert!(results[1].best.is_empty());
    assert_eq!(results[2].original, "--");
    assert!(results[2].best.is_empty());
}

#[test]
fn test_missing_letter_aborts_run() {
    let table = ScoreTable::parse("A 1\nS 1\nH 1\n", "partial").unwrap();
    let err = abbreviate_roster(&parse_names("Ash\nOak\n"), &table).unwrap_err();
    assert!(matches!(err, AppError::MissingScoreEntry { letter: 'O', .. }));
}

#[test]
fn test_file_round_trip_preserves_order_and_text() {
    let temp_dir = tempdir().unwrap();
    let names_path = temp_dir.path().join("trees.txt");
    let output_path = temp_dir.path().join("output").join("trees_abbrevs.txt");
    fs::write(
        &names_path,
        "Devil's Club\nBox Elder  \nAl\nSilver-Birch.\n\nElm\nElm\n",
    )
    .unwrap();

    let names = read_names(&names_path).unwrap();
    let results = abbreviate_roster(&names, &values_table()).unwrap();
    write_report(&output_path, &results).unwrap();

    let content = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), names.len() * 2);
    assert_eq!(lines[0], "Devil's Club");
    assert_eq!(lines[2], "Box Elder");
    assert_eq!(lines[4], "Al");
    assert_eq!(lines[5], "");
    assert_eq!(lines[6], "Silver-Birch.");

    let reread = read_report(&output_path).unwrap();
    assert_eq!(reread, results);
}

#[test]
fn test_output_is_deterministic() {
    let table = values_table();
    let roster = parse_names("Quaking Aspen\nWhite Ash\nGreen Ash\nWhite Oak\n");

    let first = abbreviate_roster(&roster, &table).unwrap();
    let second = abbreviate_roster(&roster, &table).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_name_parse_matches_roster_parse() {
    let names = parse_names("Sugar Maple\n");
    assert_eq!(names[0], Name::parse("Sugar Maple"));
}
