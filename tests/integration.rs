use kubealias::aliases::write_aliases;
use kubealias::config_file::{ConfigVocabulary, Format};
use kubealias::generator::generate;
use kubealias::load_vocabulary;
use kubealias::parts::group::Group;
use kubealias::parts::part::Part;
use kubealias::parts::stage::Stage;
use kubealias::parts::vocabulary::Vocabulary;

fn make_vocabulary(stages: Vec<Vec<Part>>) -> Vocabulary {
    let mut groups = stages.into_iter().map(Group::from);
    let mut next = || groups.next().unwrap_or_default();
    Vocabulary {
        commands: next(),
        global_options: next(),
        operations: next(),
        resources: next(),
        arguments: next(),
        positional_arguments: next(),
    }
}

fn render(vocabulary: &Vocabulary) -> String {
    let mut out = Vec::new();
    write_aliases(&mut out, vocabulary, None).unwrap();
    String::from_utf8(out).unwrap()
}

fn alias_sets(vocabulary: &Vocabulary) -> Vec<Vec<String>> {
    generate(vocabulary)
        .map(|c| c.parts().iter().map(|p| p.alias.clone()).collect())
        .collect()
}

/// Gate check written out over plain alias strings: earlier parts may block
/// the candidate, and a non-empty allow-list needs one earlier alias.
fn naive_admits(chosen: &[&Part], candidate: &Part) -> bool {
    let blocked = chosen
        .iter()
        .any(|p| p.incompatible_with.contains(&candidate.alias));
    let allowed = candidate.allow_when_one_of.is_empty()
        || candidate
            .allow_when_one_of
            .iter()
            .any(|a| chosen.iter().any(|p| &p.alias == a));
    !blocked && allowed
}

fn naive_render(chosen: &[&Part]) -> String {
    let name: String = chosen.iter().map(|p| p.alias.as_str()).collect();
    let mut expansion = String::new();
    for part in chosen {
        expansion.push_str(&part.full);
        expansion.push(' ');
    }
    format!("alias {name}='{}'", expansion.trim())
}

/// Walks every choice vector (one optional part per later stage) like an
/// odometer and keeps the ones whose every added part was valid at that point.
fn naive_lines(vocabulary: &Vocabulary) -> Vec<String> {
    let stages = vocabulary.stages();
    let mut lines = Vec::new();
    for command in stages[0] {
        // choice[i] == len means the stage is skipped; skip is the last digit
        let mut choice = vec![0usize; Stage::COUNT - 1];
        'odometer: loop {
            let mut chosen: Vec<&Part> = vec![command];
            let mut valid = true;
            for (i, &c) in choice.iter().enumerate() {
                let group = stages[i + 1];
                if c < group.len() {
                    let part = &group.parts[c];
                    if !naive_admits(&chosen, part) {
                        valid = false;
                        break;
                    }
                    chosen.push(part);
                }
            }
            if valid {
                lines.push(naive_render(&chosen));
            }

            for i in (0..choice.len()).rev() {
                if choice[i] < stages[i + 1].len() {
                    choice[i] += 1;
                    continue 'odometer;
                }
                choice[i] = 0;
            }
            break;
        }
    }
    lines
}

fn synthetic() -> Vocabulary {
    make_vocabulary(vec![
        vec![Part::new("k", "kubectl"), Part::new("h", "helm")],
        vec![
            Part::new("sys", "--namespace=kube-system").incompatible_with(["d", "x"]),
            Part::new("q", "--quiet").allow_when_one_of(["h"]),
        ],
        vec![
            Part::new("g", "get"),
            Part::new("d", "describe").incompatible_with(["sys", "w"]),
            Part::new("x", "exec"),
        ],
        vec![
            Part::new("po", "pods").allow_when_one_of(["g", "d"]),
            Part::new("no", "nodes")
                .allow_when_one_of(["g"])
                .incompatible_with(["l"]),
        ],
        vec![
            Part::new("w", "--watch").allow_when_one_of(["g"]),
            Part::new("oy", "-o=yaml").allow_when_one_of(["g", "d", "missing"]),
        ],
        vec![
            Part::new("l", "-l").allow_when_one_of(["po", "no"]),
            Part::new("n", "--namespace").allow_when_one_of(["ghost"]),
        ],
    ])
}

#[test]
fn test_matches_naive_generator() {
    let vocabulary = synthetic();
    let lines: Vec<String> = generate(&vocabulary).map(|c| c.to_string()).collect();
    assert_eq!(lines, naive_lines(&vocabulary));
}

#[test]
fn test_matches_naive_generator_for_builtin() {
    let vocabulary = load_vocabulary(None).unwrap();
    let lines: Vec<String> = generate(&vocabulary).map(|c| c.to_string()).collect();
    assert_eq!(lines, naive_lines(&vocabulary));
}

#[test]
fn test_deterministic() {
    let vocabulary = load_vocabulary(None).unwrap();
    assert_eq!(render(&vocabulary), render(&vocabulary));
}

#[test]
fn test_skip_is_always_a_continuation() {
    // Every emitted combination with its last later-stage part removed is emitted too
    let vocabulary = synthetic();
    let sets = alias_sets(&vocabulary);
    for set in sets.iter().filter(|s| s.len() > 1) {
        let prefix = &set[..set.len() - 1];
        assert!(
            sets.iter().any(|s| s == prefix),
            "{set:?} emitted but {prefix:?} is not"
        );
    }
}

#[test]
fn test_blocklist() {
    let sets = alias_sets(&synthetic());
    for set in &sets {
        let has = |alias: &str| set.iter().any(|a| a == alias);
        assert!(!(has("sys") && has("d")), "{set:?}");
        assert!(!(has("sys") && has("x")), "{set:?}");
        assert!(!(has("d") && has("w")), "{set:?}");
        assert!(!(has("no") && has("l")), "{set:?}");
    }
}

#[test]
fn test_allowlist() {
    let sets = alias_sets(&synthetic());
    for set in &sets {
        let has = |alias: &str| set.iter().any(|a| a == alias);
        if has("po") {
            assert!(has("g") || has("d"), "{set:?}");
        }
        if has("l") {
            assert!(has("po") || has("no"), "{set:?}");
        }
        if has("q") {
            assert!(has("h"), "{set:?}");
        }
        // gated only on an alias nobody defines
        assert!(!has("n"), "{set:?}");
    }
    assert!(sets.iter().any(|s| s == &["k", "g", "oy"]));
}

#[test]
fn test_end_to_end_system_namespace() {
    let vocabulary = make_vocabulary(vec![
        vec![Part::new("k", "kubectl")],
        vec![Part::new("sys", "--namespace=kube-system").incompatible_with(["d"])],
        vec![Part::new("d", "describe").incompatible_with(["sys"])],
    ]);
    insta::assert_snapshot!(render(&vocabulary), @r"
    alias ksys='kubectl --namespace=kube-system'
    alias kd='kubectl describe'
    alias k='kubectl'
    ");
}

#[test]
fn test_vocabulary_file_round_trip() {
    let builtin = load_vocabulary(None).unwrap();
    let dir = tempfile::tempdir().unwrap();
    for (name, format) in [("vocabulary.yaml", Format::Yaml), ("vocabulary.json", Format::Json)] {
        let path = dir.path().join(name);
        let text = ConfigVocabulary::from(&builtin).to_text(format).unwrap();
        std::fs::write(&path, text).unwrap();
        let loaded = load_vocabulary(Some(path.as_path())).unwrap();
        assert_eq!(loaded, builtin);
        assert_eq!(render(&loaded), render(&builtin));
    }
}

#[test]
fn test_partial_vocabulary_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.yaml");
    std::fs::write(
        &path,
        r"
commands:
  - alias: h
    full: helm
operations:
  - alias: ls
    full: list
  - alias: un
    full: uninstall
arguments:
  - alias: A
    full: --all-namespaces
    allow_when_one_of: [ls]
",
    )
    .unwrap();
    let vocabulary = load_vocabulary(Some(path.as_path())).unwrap();
    insta::assert_snapshot!(render(&vocabulary), @r"
    alias hlsA='helm list --all-namespaces'
    alias hls='helm list'
    alias hun='helm uninstall'
    alias h='helm'
    ");
}
