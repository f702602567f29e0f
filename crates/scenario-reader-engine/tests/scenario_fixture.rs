use pretty_assertions::assert_eq;
use scenario_reader_engine::{
    ContentParser, InlineKind, Stat, ViewBlock, Weapon, load_scenario,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR")))
}

#[test]
fn loads_directory_scenario_in_reading_order() {
    let scenario = load_scenario(&fixture("wanna-eat-more")).unwrap();

    assert_eq!(scenario.title, "WANNA EAT MORE");
    let ids: Vec<_> = scenario.chapters.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["intro", "section-1", "section-2", "section-3"]);

    let toc = scenario.table_of_contents();
    let categories: Vec<_> = toc.iter().map(|g| g.category).collect();
    assert_eq!(
        categories,
        vec!["前言", "模组背景&导入", "故事开始", "结局与结算"]
    );
}

#[test]
fn ordinary_subject_snapshot() {
    let scenario = load_scenario(&fixture("wanna-eat-more")).unwrap();
    let chapter = scenario.chapter("section-2").unwrap();
    let snap = ContentParser::default().snapshot(chapter);

    assert_eq!(snap.blocks[0], ViewBlock::SectionBreak("1"));
    let ViewBlock::StatBlock(clerk) = &snap.blocks[2] else {
        panic!("expected stat block, got {:?}", snap.blocks[2]);
    };
    assert_eq!(clerk.title, "店员 佐藤");
    assert!(!clerk.is_mythos);
    assert_eq!(clerk.core_stats.len(), 8);
    assert_eq!(
        clerk.derived_stats,
        vec![Stat::new("耐久力", "13"), Stat::new("移动", "8")]
    );
    assert_eq!(clerk.damage_bonus.as_deref(), Some("0"));
    assert_eq!(clerk.skills, vec!["侦查50%", "聆听40%"]);
    assert_eq!(
        clerk.general_notes,
        vec!["连续加班了一个月，已经不记得上次休息是什么时候。"]
    );

    let ViewBlock::Collapsible { paragraphs, .. } = &snap.blocks[3] else {
        panic!("expected collapsible, got {:?}", snap.blocks[3]);
    };
    let emphasized: Vec<_> = paragraphs[0]
        .iter()
        .filter(|s| s.kind == InlineKind::Emphasis)
        .map(|s| s.text)
        .collect();
    assert_eq!(emphasized, vec!["SAN值", "0/1D3"]);
}

#[test]
fn mythos_entity_snapshot() {
    let scenario = load_scenario(&fixture("wanna-eat-more")).unwrap();
    let chapter = scenario.chapter("section-3").unwrap();
    let snap = ContentParser::default().snapshot(chapter);

    let ViewBlock::StatBlock(entity) = &snap.blocks[0] else {
        panic!("expected stat block, got {:?}", snap.blocks[0]);
    };
    assert_eq!(entity.title, "食梦者");
    assert!(entity.is_mythos);
    assert_eq!(entity.core_stats[4], Stat::new("POW", "100"));
    assert_eq!(entity.damage_bonus.as_deref(), Some("+1D6"));
    assert_eq!(
        entity.weapons,
        vec![Weapon {
            name: "触手".to_string(),
            stats: "1D6+db".to_string()
        }]
    );
    assert_eq!(entity.armor.as_deref(), Some("无，但只有魔法武器能造成伤害"));
    assert_eq!(entity.sanity_loss.as_deref(), Some("1D4/1D8"));
    assert_eq!(entity.special_abilities.len(), 1);
    assert!(entity.general_notes.is_empty());
}

#[test]
fn list_items_are_highlighted() {
    let scenario = load_scenario(&fixture("wanna-eat-more")).unwrap();
    let chapter = scenario.chapter("section-1").unwrap();
    let snap = ContentParser::default().snapshot(chapter);

    assert_eq!(snap.blocks[0], ViewBlock::Heading("事件的真相"));
    assert_eq!(snap.blocks[2], ViewBlock::Rule);
    let ViewBlock::List(items) = &snap.blocks[3] else {
        panic!("expected list, got {:?}", snap.blocks[3]);
    };
    assert_eq!(items[0][0].kind, InlineKind::BracketCallout);
    assert_eq!(items[0][0].text, "【线索A】");
    assert_eq!(items[1][0].kind, InlineKind::AngleCallout);
    assert_eq!(items[1][0].text, "<侦查>");
}
