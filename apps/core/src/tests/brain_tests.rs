//! Brain Module Tests
//!
//! Classification rules, aggregation and the recommendation engine.

use crate::brain::ai_analysis::{BalanceImpact, ComplianceRisk, InsightSource, Severity};
use crate::brain::{
    generate_fallback_ai_analysis, perform_basic_analysis, AiAnalysis, BasicAnalysis, Category,
    Insights, Item, KeywordTable, KeywordTables, Priority, RecommendationType, TableName,
    TaskAnalyzer,
};

fn full(text: &str) -> (BasicAnalysis, AiAnalysis) {
    let analysis = TaskAnalyzer::new().analyze_full(text);
    (analysis.basic, analysis.ai)
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let basic = perform_basic_analysis("");
        assert_eq!(basic.insights, Insights::default());
        assert!(basic.todos.is_empty());
        assert!(basic.termine.is_empty());
        assert!(basic.knowledge.is_empty());
        assert!(basic.risiken.is_empty());
        assert!(basic.business.is_empty());
        assert!(basic.categorization_feedback.suggestions.is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        let basic = perform_basic_analysis("\n   \n\t\n");
        assert_eq!(basic.insights.total_items, 0);
    }

    #[test]
    fn test_deadline_only_line() {
        let basic = perform_basic_analysis("deadline");
        assert_eq!(basic.todos.len(), 1);
        let item = &basic.todos[0];
        assert_eq!(item.priority, Priority::High);
        assert_eq!(item.category, Category::General);
        assert_eq!(item.confidence, 0.3);
        assert_eq!(basic.categorization_feedback.uncategorized, vec!["deadline"]);
        assert_eq!(basic.categorization_feedback.low_confidence.len(), 1);
    }

    #[test]
    fn test_single_audit_keyword() {
        let basic = perform_basic_analysis("Audit");
        assert_eq!(basic.risiken.len(), 1);
        let item = &basic.risiken[0];
        assert_eq!(item.category, Category::Risk);
        assert_eq!(item.priority, Priority::High);
        assert!(item.confidence <= 0.7);
    }

    #[test]
    fn test_business_risk_tie_break() {
        let basic = perform_basic_analysis("business risk");
        assert_eq!(basic.business.len(), 1);
        assert!(basic.risiken.is_empty());
        assert_eq!(basic.business[0].priority, Priority::Medium);
    }

    #[test]
    fn test_risk_overrides_priority() {
        let basic = perform_basic_analysis("Datenschutz Compliance prüfen");
        assert_eq!(basic.risiken.len(), 1);
        assert_eq!(basic.risiken[0].priority, Priority::High);
        assert_eq!(
            basic.risiken[0].matched_keywords,
            vec!["compliance", "datenschutz"]
        );
    }

    #[test]
    fn test_energy_line_goes_to_todos_without_flag() {
        let basic = perform_basic_analysis("Stadtwerke Smart Grid");
        assert_eq!(basic.todos.len(), 1);
        assert_eq!(basic.todos[0].category, Category::General);
        assert!(basic.categorization_feedback.uncategorized.is_empty());
    }

    #[test]
    fn test_ids_follow_non_blank_order() {
        let basic = perform_basic_analysis("Audit\n\nMeeting\n   \nResearch");
        let mut ids: Vec<(usize, &str)> = basic
            .all_items()
            .map(|i| (i.id, i.text.as_str()))
            .collect();
        ids.sort();
        assert_eq!(ids, vec![(0, "Audit"), (1, "Meeting"), (2, "Research")]);
    }

    #[test]
    fn test_low_confidence_suggestion_needs_more_than_three() {
        let basic = perform_basic_analysis("eins\nzwei\ndrei\nvier");
        let feedback = &basic.categorization_feedback;
        assert_eq!(feedback.uncategorized.len(), 4);
        assert_eq!(feedback.low_confidence.len(), 4);
        assert_eq!(feedback.suggestions.len(), 2);
        assert!(feedback.suggestions[0].starts_with("4 Items"));
    }
}

#[cfg(test)]
mod recommendation_tests {
    use super::*;

    fn recommendation_types(ai: &AiAnalysis) -> Vec<(RecommendationType, u32)> {
        ai.predictive_recommendations
            .iter()
            .map(|r| (r.kind, r.confidence))
            .collect()
    }

    #[test]
    fn test_empty_input_metrics() {
        let (_, ai) = full("");
        let metrics = ai.performance_metrics;
        assert_eq!(metrics.knowledge_to_action_ratio, 0);
        assert_eq!(metrics.business_focus_score, 0);
        assert_eq!(metrics.risk_management_coverage, 0);
        assert_eq!(metrics.work_life_integration, 40);
        assert_eq!(metrics.categorization_accuracy, 90);
        assert_eq!(metrics.keyword_coverage, 100);
        assert!(ai.predictive_recommendations.is_empty());
        assert!(ai.semantic_insights.risk_clusters.is_empty());
    }

    #[test]
    fn test_energy_items_never_empty() {
        let (_, ai) = full("");
        let energy = &ai.semantic_insights.energy_domain_items;
        assert_eq!(energy.len(), 2);
        assert_eq!(energy[0].text, "Smart Grid Implementation");
        assert_eq!(energy[1].text, "Energy Forecasting ML");

        let (_, ai) = full("Stadtwerke Smart Grid");
        let energy = &ai.semantic_insights.energy_domain_items;
        assert_eq!(energy.len(), 1);
        assert_eq!(energy[0].source, InsightSource::Detected);
    }

    #[test]
    fn test_business_recommendation() {
        let (_, ai) = full("Business");
        assert_eq!(
            recommendation_types(&ai),
            vec![(RecommendationType::Strategic, 68)]
        );
        assert_eq!(
            ai.predictive_recommendations[0].basis,
            "Erkannte Business-Keywords: business"
        );
    }

    #[test]
    fn test_single_risk_has_no_risk_recommendation() {
        let (_, ai) = full("Audit");
        assert!(ai.predictive_recommendations.is_empty());
        assert_eq!(ai.semantic_insights.risk_clusters.len(), 1);
    }

    #[test]
    fn test_risk_recommendation() {
        let (_, ai) = full("Audit\nCompliance");
        assert_eq!(recommendation_types(&ai), vec![(RecommendationType::Risk, 86)]);
    }

    #[test]
    fn test_knowledge_imbalance_recommendation() {
        let (_, ai) = full("Research\nPaper lesen");
        assert_eq!(
            recommendation_types(&ai),
            vec![(RecommendationType::Performance, 85)]
        );
        assert_eq!(
            ai.predictive_recommendations[0].basis,
            "Knowledge Items (2) > Action Items (0)"
        );
    }

    #[test]
    fn test_four_meetings_trigger_networking() {
        let (basic, ai) = full("Meeting 1\nMeeting 2\nMeeting 3\nMeeting 4");
        assert_eq!(basic.termine.len(), 4);
        let networking = ai
            .predictive_recommendations
            .iter()
            .find(|r| r.title == "NETWORKING & PARTNERSHIP MOMENTUM")
            .expect("networking recommendation");
        assert_eq!(networking.kind, RecommendationType::Strategic);
        assert_eq!(networking.confidence, 90);
    }

    #[test]
    fn test_three_meetings_do_not_trigger_networking() {
        let (_, ai) = full("Meeting 1\nMeeting 2\nMeeting 3");
        assert!(ai.predictive_recommendations.is_empty());
    }

    #[test]
    fn test_critical_path_deadlines() {
        let (_, ai) = full("Audit morgen\nAudit offen\nAudit\nAudit morgen offen");
        let deadlines: Vec<&str> = ai
            .intelligent_prioritization
            .critical_path
            .iter()
            .map(|c| c.deadline.as_str())
            .collect();
        assert_eq!(deadlines, vec!["TOMORROW", "ASAP", "This week", "TOMORROW"]);

        let actions: Vec<&str> = ai
            .intelligent_prioritization
            .regulatory_urgency
            .iter()
            .map(|r| r.action.as_str())
            .collect();
        assert_eq!(
            actions,
            vec![
                "Plan within sprint",
                "Schedule immediately",
                "Plan within sprint",
                "Schedule immediately"
            ]
        );
        assert!(ai
            .intelligent_prioritization
            .regulatory_urgency
            .iter()
            .all(|r| r.compliance_risk == ComplianceRisk::Critical));
    }

    #[test]
    fn test_medium_risk_item_handling() {
        let mut basic = BasicAnalysis::default();
        basic.risiken.push(Item {
            id: 0,
            text: "Haftung klären".to_string(),
            priority: Priority::Medium,
            category: Category::Risk,
            confidence: 0.6,
            matched_keywords: vec!["haftung".to_string()],
        });
        basic.insights.total_items = 1;

        let ai = generate_fallback_ai_analysis(&basic);
        assert_eq!(ai.semantic_insights.risk_clusters[0].severity, Severity::High);
        assert!(ai.intelligent_prioritization.critical_path.is_empty());
        assert_eq!(
            ai.intelligent_prioritization.regulatory_urgency[0].compliance_risk,
            ComplianceRisk::Medium
        );
        assert_eq!(ai.performance_metrics.risk_management_coverage, 100);
    }

    #[test]
    fn test_business_opportunities() {
        let (_, ai) = full("Business Plan Beratung\nBusiness");
        let opportunities = &ai.semantic_insights.business_opportunities;
        assert_eq!(opportunities.len(), 2);
        assert!(opportunities[0].monetization_potential.starts_with("High potential"));
        assert_eq!(opportunities[1].monetization_potential, "Medium potential");
        assert_eq!(opportunities[0].effort.as_deref(), Some("medium"));
    }

    #[test]
    fn test_urgent_business_is_low_effort() {
        let (_, ai) = full("Business Plan dringend");
        assert_eq!(
            ai.semantic_insights.business_opportunities[0].effort.as_deref(),
            Some("low")
        );
    }

    #[test]
    fn test_work_life_balance_vocabularies() {
        let (_, ai) = full("Mittagspause blocken");
        assert_eq!(ai.intelligent_prioritization.work_life_balance.len(), 1);
        assert_eq!(
            ai.intelligent_prioritization.work_life_balance[0].balance_impact,
            BalanceImpact::Positive
        );
        assert_eq!(ai.performance_metrics.work_life_integration, 80);

        let (_, ai) = full("Mitarbeiterversammlung");
        assert_eq!(ai.intelligent_prioritization.work_life_balance.len(), 1);
        assert_eq!(ai.performance_metrics.work_life_integration, 40);

        let (_, ai) = full("Yoga");
        assert!(ai.intelligent_prioritization.work_life_balance.is_empty());
        assert_eq!(ai.performance_metrics.work_life_integration, 80);
    }

    #[test]
    fn test_engine_uses_injected_energy_table() {
        let basic = perform_basic_analysis("Solarpark besichtigen");
        let ai = AiAnalysis::from_basic(&basic, KeywordTables::builtin());
        assert!(ai
            .semantic_insights
            .energy_domain_items
            .iter()
            .all(|i| i.source == InsightSource::Static));

        let tables = KeywordTables::new(vec![KeywordTable::new(
            TableName::Energy,
            ["Solarpark"],
        )]);
        let analysis = TaskAnalyzer::with_tables(tables).analyze_full("Solarpark besichtigen");
        assert_eq!(analysis.basic.todos.len(), 1);
        assert!(analysis.basic.categorization_feedback.uncategorized.is_empty());
        let energy = &analysis.ai.semantic_insights.energy_domain_items;
        assert_eq!(energy.len(), 1);
        assert_eq!(energy[0].source, InsightSource::Detected);
    }
}
