use kuralosai::VerboseResolution;

/// Minimal ANSI styling for the stage report. Every method degrades to the
/// plain string when color is off, so the report stays pipe-friendly.
struct Ink {
    on: bool,
}

impl Ink {
    fn wrap(&self, code: &str, s: &str) -> String {
        if self.on { format!("\x1b[{code}m{s}\x1b[0m") } else { s.to_string() }
    }

    fn heading(&self, s: &str) -> String {
        self.wrap("1;36", s)
    }

    fn rule(&self, s: &str) -> String {
        self.wrap("90", s)
    }

    fn hit(&self, s: &str) -> String {
        self.wrap("32", s)
    }

    fn value(&self, s: &str) -> String {
        self.wrap("33", s)
    }

    fn faint(&self, s: &str) -> String {
        self.wrap("2", s)
    }
}

pub fn print_run(query: &str, out: &VerboseResolution, color: bool) {
    let ink = Ink { on: color };
    println!("\n{}", ink.heading(&format!("⚙  Resolving: \"{query}\"")));

    println!("\n{}", ink.rule("━━━ Stages ━━━"));
    for stage in &out.details.stages {
        let mark = if stage.matched { ink.hit("✓") } else { ink.faint("·") };
        println!("  {} {:<10} {}", mark, stage.stage, ink.faint(&stage.note));
    }

    println!("\n{}", ink.rule("━━━ Answer ━━━"));
    println!(
        "  method: {}   confidence: {}",
        ink.value(&out.resolution.method.to_string()),
        ink.hit(&format!("{:.2}", out.resolution.confidence)),
    );
    if !out.details.raw_answer.is_empty() && out.details.raw_answer != out.resolution.text {
        println!("  raw:        {}", ink.faint(&out.details.raw_answer.replace('\n', " / ")));
    }
    println!("  normalized: {}", out.resolution.text);

    println!("\n{}", ink.rule("━━━ Timing ━━━"));
    println!(
        "  Total: {}  │  Fuzzy scan: {}",
        ink.hit(&format!("{:?}", out.details.total)),
        ink.faint(&format!("{:?}", out.details.fuzzy_scan)),
    );
    println!();
}
