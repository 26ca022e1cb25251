use campus_core::dataset::ANTI_RAGGING_HELPLINE;
use campus_core::{
    is_similar, AssistantConfig, ContactEntry, DirectoryConfig, IntentResolver, IntentRule,
    MatchOutcome, Tier,
};

fn campus() -> IntentResolver {
    IntentResolver::new(AssistantConfig::campus_default()).expect("bundled config is valid")
}

fn synthetic(rules: Vec<IntentRule>, directory: DirectoryConfig) -> IntentResolver {
    IntentResolver::new(AssistantConfig {
        rules,
        directory,
        ..AssistantConfig::campus_default()
    })
    .expect("synthetic config is valid")
}

#[test]
fn identical_input_gives_identical_output() {
    let resolver = campus();
    for input in [
        "what's in the mess today",
        "dalia",
        "hello",
        "hello there",
        "",
        "  Ragging  HELP ",
    ] {
        assert_eq!(resolver.classify(input), resolver.classify(input));
        assert_eq!(resolver.resolve(input), resolver.resolve(input));
    }
}

#[test]
fn mess_question_never_routes_to_directory() {
    let resolver = campus();
    let outcome = resolver.classify("what's in the mess today");
    assert_eq!(outcome.tier(), Tier::Keyword);
    assert_eq!(
        resolver.render(&outcome),
        "🍴 You can check the **Mess Menu** section for today's breakfast, lunch, and dinner!"
    );
}

#[test]
fn keyword_rule_wins_over_matching_directory_role() {
    // "professor" is a faculty role, "food" is a mess trigger.
    let resolver = campus();
    let outcome = resolver.classify("professor food");
    assert!(matches!(
        outcome,
        MatchOutcome::KeywordMatch { rule, .. } if rule.id == "mess_menu"
    ));
}

#[test]
fn three_character_floor_on_match_predicate() {
    assert!(!is_similar("hi", "this is hi"));
    assert!(is_similar("him", "this is him"));
}

#[test]
fn two_letter_token_is_ignored() {
    let resolver = campus();
    assert_eq!(resolver.classify("hi iiit").tier(), Tier::Directory);
    assert_eq!(resolver.classify("is me").tier(), Tier::Fallback);
}

#[test]
fn directory_first_match_follows_concatenation_order() {
    let resolver = synthetic(
        Vec::new(),
        DirectoryConfig {
            office: Vec::new(),
            faculty: vec![ContactEntry::new("Dr. Uma Das", "Assistant Professor", "uma@x")],
            student_body: vec![ContactEntry::new("Das", "Treasurer", "das@x")],
        },
    );

    match resolver.classify("das") {
        MatchOutcome::DirectoryMatch { record, .. } => assert_eq!(record.contact, "uma@x"),
        other => panic!("expected directory match, got {other:?}"),
    }

    let resolver = synthetic(
        Vec::new(),
        DirectoryConfig {
            office: vec![ContactEntry::new("Zed Das Office", "Front Desk", "desk@x")],
            faculty: vec![ContactEntry::new("Dr. Abe Das", "Professor", "abe@x")],
            student_body: Vec::new(),
        },
    );
    assert!(resolver.resolve("das").contains("desk@x"));
}

#[test]
fn bundled_directory_resolves_first_das() {
    let reply = campus().resolve("das");
    assert_eq!(
        reply,
        "I think you're asking about **Dr. Dalia Nandi (Das)** (Associate Professor). Contact: **dalia@iiitkalyani.ac.in**"
    );
}

#[test]
fn greeting_is_exact_match_only() {
    let resolver = campus();
    assert_eq!(
        resolver.resolve("hello"),
        "Hello! How can I help you with campus information today?"
    );
    assert_eq!(resolver.classify("HI").tier(), Tier::Greeting);
    assert_eq!(resolver.classify("hello there").tier(), Tier::Fallback);
    assert_eq!(resolver.classify("hi there").tier(), Tier::Fallback);
}

#[test]
fn empty_and_unknown_input_fall_back() {
    let resolver = campus();
    let expected = "I'm not quite sure about that. Try asking about 'mess', 'ragging', or a specific teacher's name.";
    assert_eq!(resolver.resolve(""), expected);
    assert_eq!(resolver.resolve("xyz123"), expected);
}

#[test]
fn helpline_is_returned_for_safety_keywords() {
    let resolver = campus();
    for input in ["ragging", "I need help", "anti squad"] {
        assert!(resolver.resolve(input).contains(ANTI_RAGGING_HELPLINE), "{input}");
    }
}

#[test]
fn rule_precedence_follows_table_order() {
    let food = IntentRule::new("food", &["canteen"], "food reply");
    let safety = IntentRule::new("safety", &["warden"], "safety reply");
    let utterance = "warden at the canteen";

    let food_first = synthetic(vec![food.clone(), safety.clone()], DirectoryConfig::default());
    assert_eq!(food_first.resolve(utterance), "food reply");

    let safety_first = synthetic(vec![safety, food], DirectoryConfig::default());
    assert_eq!(safety_first.resolve(utterance), "safety reply");
}
