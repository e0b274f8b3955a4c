//! Static landing content: hero, feature cards and footer.

pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub call_to_action: &'static str,
}

pub struct FeatureCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HERO: Hero = Hero {
    title: "QuantumSpace",
    tagline: "Pioneering the frontier of space research, quantum theory and AI-driven discovery.",
    call_to_action: "Ask our research assistant or browse the research database.",
};

pub const FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "Space Research",
        body: "Autonomous rovers, satellite constellations and mission analytics for the next generation of exploration.",
    },
    FeatureCard {
        title: "Quantum Theory",
        body: "Entanglement-based communication, quantum algorithms and cryptography built for deep-space links.",
    },
    FeatureCard {
        title: "AI Programming",
        body: "Machine learning models that classify celestial objects and plan missions faster than any human team.",
    },
    FeatureCard {
        title: "Database Technology",
        body: "Distributed research data platforms that keep petabytes of mission data consistent across institutions.",
    },
];

pub const FOOTER: &str = "QuantumSpace Research Platform. Exploring the universe, one qubit at a time.";

/// Render the landing page as plain text, `width` columns wide.
pub fn render_landing(width: usize) -> String {
    let rule = "=".repeat(width);
    let mut out = format!(
        "{rule}\n{title:^width$}\n{rule}\n{tagline}\n{cta}\n\n",
        title = HERO.title,
        tagline = HERO.tagline,
        cta = HERO.call_to_action,
    );

    for card in &FEATURES {
        out.push_str(&format!("* {}\n  {}\n", card.title, card.body));
    }

    out.push_str(&format!("\n{}\n{}\n", "-".repeat(width), FOOTER));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_contains_every_section() {
        let page = render_landing(60);
        assert!(page.contains(HERO.title));
        assert!(page.contains(HERO.tagline));
        for card in &FEATURES {
            assert!(page.contains(card.title));
        }
        assert!(page.trim_end().ends_with(FOOTER));
    }

    #[test]
    fn test_landing_title_is_centered_between_rules() {
        let page = render_landing(20);
        let lines: Vec<&str> = page.lines().collect();
        assert_eq!(lines[0], "=".repeat(20));
        assert_eq!(lines[1], format!("{:^20}", HERO.title));
        assert_eq!(lines[2], "=".repeat(20));
    }
}
