// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_paragraph(size: usize) -> String {
    let base = "调查员走进房间，进行<侦查>检定。成功者获得【线索A】，失败者SAN值丧失1D4/1D8，并进行一次IDEA检定。";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_stat_block(notes: usize) -> String {
    let mut blob = String::from(
        "食梦者\nSTR 80 CON 70 SIZ 90 INT 60 POW 100 DEX 40\n耐久力 16 移动 10\ndb +1D6\n武器：触手 1D6+db\n技能：潜行80% 侦查50%\n装甲：无\nSAN值丧失：1D4/1D8\n",
    );
    for i in 0..notes {
        blob.push_str(&format!("＊能力{i}：每轮吞噬一名目标的梦境。\n"));
        blob.push_str(&format!("第{i}条观察记录，内容较长以便进入笔记。\n"));
    }
    blob
}
