use crate::reveal::{ChildConfig, RevealConfig, CHILD_ANIMATION_DELAY, SCROLL_TOP_THRESHOLD};

/// Anchored page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Cv,
    Portfolio,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Cv,
        SectionId::Portfolio,
        SectionId::Contact,
    ];

    /// Element id, without the leading `#`.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Cv => "cv",
            SectionId::Portfolio => "portfolio",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Cv => "CV",
            SectionId::Portfolio => "Portfolio",
            SectionId::Contact => "Contact",
        }
    }

    /// Reveal tuning for the section; `None` for sections that render
    /// their entrance with plain CSS keyframes.
    pub fn reveal_config(self) -> Option<RevealConfig> {
        let config = match self {
            SectionId::Home => return None,
            SectionId::About => RevealConfig {
                scroll_threshold: SCROLL_TOP_THRESHOLD,
                intersection_threshold: 0.18,
                root_margin: "-60px",
                gate_on_scroll: false,
                child: Some(ChildConfig {
                    threshold: 0.25,
                    root_margin: "-60px",
                    delay: CHILD_ANIMATION_DELAY,
                }),
            },
            SectionId::Cv => RevealConfig {
                intersection_threshold: 0.2,
                root_margin: "-50px 0px -50px 0px",
                ..RevealConfig::default()
            },
            SectionId::Portfolio | SectionId::Contact => RevealConfig {
                intersection_threshold: 0.3,
                ..RevealConfig::default()
            },
        };
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors_are_unique() {
        let mut anchors = SectionId::ALL.map(SectionId::anchor).to_vec();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), SectionId::ALL.len());
        assert_eq!(SectionId::Cv.href(), "#cv");
    }

    #[test]
    fn test_reveal_configs_share_one_scroll_threshold() {
        for section in SectionId::ALL {
            if let Some(config) = section.reveal_config() {
                assert_eq!(config.scroll_threshold, SCROLL_TOP_THRESHOLD);
                assert!((0.14..=0.3).contains(&config.intersection_threshold));
            }
        }
    }

    #[test]
    fn test_only_about_has_child_region() {
        let with_child = SectionId::ALL
            .into_iter()
            .filter(|s| s.reveal_config().is_some_and(|c| c.child.is_some()))
            .collect::<Vec<_>>();
        assert_eq!(with_child, vec![SectionId::About]);

        let about = SectionId::About.reveal_config().unwrap();
        assert!(!about.gate_on_scroll);
        assert!(SectionId::Contact.reveal_config().unwrap().gate_on_scroll);
        assert!(SectionId::Home.reveal_config().is_none());
    }
}
