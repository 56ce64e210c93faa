/// Tests for the screen rendering model
#[cfg(test)]
mod tests {
    use crate::report::blocks::TextBlock;
    use crate::report::screen::*;
    use crate::test_fixtures::{empty_report, report_with, sample_report};

    #[test]
    fn test_palette_order_is_stable() {
        let names: Vec<&str> = BADGE_PALETTE.iter().map(|v| v.as_str()).collect();
        assert_eq!(names, vec!["primary", "secondary", "success", "warning", "error", "default"]);
    }

    #[test]
    fn test_badge_variants_repeat_with_period_six() {
        for i in 0..7 {
            assert_eq!(badge_variant(i, &BADGE_PALETTE), badge_variant(i + 6, &BADGE_PALETTE));
        }
        assert_eq!(badge_variant(6, &BADGE_PALETTE), Some(BadgeVariant::Primary));
    }

    #[test]
    fn test_badge_variant_with_empty_palette() {
        assert_eq!(badge_variant(0, &[]), None);
        assert_eq!(badge_variant(3, &[]), None);
        assert_eq!(badge_variant(3, &[BadgeVariant::Warning]), Some(BadgeVariant::Warning));
    }

    #[test]
    fn test_theme_badges_follow_palette() {
        let view = render_for_screen(&sample_report());
        assert_eq!(view.themes.len(), 7);
        assert_eq!(view.themes[0].variant, BadgeVariant::Primary);
        assert_eq!(view.themes[5].variant, BadgeVariant::Default);
        assert_eq!(view.themes[6].variant, BadgeVariant::Primary);
        assert_eq!(view.themes[6].text, "Customer support");
    }

    #[test]
    fn test_sentiment_panel_formats_one_decimal() {
        let view = render_for_screen(&sample_report());
        let readings = &view.sentiment.readings;
        assert_eq!(readings[0].polarity, Polarity::Positive);
        assert_eq!(readings[0].percent_display, "60.0%");
        assert_eq!(readings[1].percent_display, "17.5%");
        assert_eq!(readings[2].percent_display, "22.5%");
        assert_eq!(readings[0].count_display, "(120)");
        assert_eq!(readings[1].count_display, "(35)");
    }

    #[test]
    fn test_sentiment_panel_shows_raw_text_for_invalid_counts() {
        let mut report = report_with("Body", &[], &[]);
        report.sentiment.neutral = "unknown".into();
        let view = render_for_screen(&report);
        assert_eq!(view.sentiment.readings[1].count_display, "(unknown)");
        assert_eq!(view.sentiment.readings[1].percent_display, "0.0%");
        assert_eq!(view.sentiment.readings[0].percent_display, "75.0%");
    }

    #[test]
    fn test_aspect_cards_are_verbatim() {
        let view = render_for_screen(&sample_report());
        let price = view.aspects.iter().find(|a| a.aspect == "price").unwrap();
        assert_eq!(price.neutral, "n/a");
        assert_eq!(price.total_mentions, "41");
        assert_eq!(price.positive, "15");
    }

    #[test]
    fn test_metric_cards_drop_blank_descriptions() {
        let view = render_for_screen(&sample_report());
        assert_eq!(view.metrics[0].value, "1284");
        assert!(view.metrics[0].description.is_some());
        assert_eq!(view.metrics[1].value, "+38");
        assert!(view.metrics[1].description.is_none());
    }

    #[test]
    fn test_blocks_come_from_narrative() {
        let view = render_for_screen(&sample_report());
        assert_eq!(view.blocks[0], TextBlock::heading(1, "Wireless Earbuds Market Overview"));
        assert!(matches!(view.blocks[3], TextBlock::BulletList { ref items } if items.len() == 3));
    }

    #[test]
    fn test_empty_report_renders() {
        let view = render_for_screen(&empty_report());
        assert_eq!(view.blocks.len(), 1);
        assert!(view.themes.is_empty());
        assert!(view.aspects.is_empty());
        assert_eq!(view.provenance, "Based on 0 documents using  search");
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = sample_report();
        assert_eq!(render_for_screen(&report), render_for_screen(&report));
    }
}
