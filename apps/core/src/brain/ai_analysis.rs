//! Recommendation Engine.
//!
//! Rule-based stand-in for an AI advisor. Works only on an existing
//! [`BasicAnalysis`]; raw input is never re-read.

use serde::{Deserialize, Serialize};

use super::basic_analysis::BasicAnalysis;
use super::item::Item;
use super::keywords::{
    contains_any, KeywordTables, TableName, OPEN_TOKEN, TOMORROW_TOKEN, WELLBEING_TERMS,
    WORK_LIFE_BALANCE_TERMS,
};

/// Cap for count-driven recommendation confidence
const MAX_RECOMMENDATION_CONFIDENCE: u32 = 95;

/// Where an energy insight came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSource {
    Detected,
    Static,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyDomainItem {
    pub text: String,
    pub insight: Option<String>,
    pub business_potential: String,
    pub source: InsightSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessOpportunity {
    pub text: String,
    pub monetization_potential: String,
    pub effort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCluster {
    pub cluster: String,
    pub items: Vec<String>,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticInsights {
    /// Never empty
    pub energy_domain_items: Vec<EnergyDomainItem>,
    pub business_opportunities: Vec<BusinessOpportunity>,
    pub risk_clusters: Vec<RiskCluster>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalPathEntry {
    pub item: String,
    pub reasoning: String,
    pub deadline: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceImpact {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLifeBalanceEntry {
    pub item: String,
    pub balance_impact: BalanceImpact,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceRisk {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryEntry {
    pub item: String,
    pub compliance_risk: ComplianceRisk,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligentPrioritization {
    pub critical_path: Vec<CriticalPathEntry>,
    pub work_life_balance: Vec<WorkLifeBalanceEntry>,
    pub regulatory_urgency: Vec<RegulatoryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecommendationType {
    Strategic,
    Risk,
    /// Reserved; no rule emits it
    Business,
    Performance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub message: String,
    /// Percent, 0..=100
    pub confidence: u32,
    pub basis: String,
}

/// Percentages in 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub knowledge_to_action_ratio: u32,
    pub business_focus_score: u32,
    pub risk_management_coverage: u32,
    pub work_life_integration: u32,
    pub categorization_accuracy: u32,
    pub keyword_coverage: u32,
}

/// Advisor view derived from one basic analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub semantic_insights: SemanticInsights,
    pub intelligent_prioritization: IntelligentPrioritization,
    pub predictive_recommendations: Vec<Recommendation>,
    pub performance_metrics: PerformanceMetrics,
}

impl AiAnalysis {
    pub fn from_basic(basic: &BasicAnalysis, tables: &KeywordTables) -> Self {
        let all_items: Vec<&Item> = basic.all_items().collect();

        Self {
            semantic_insights: SemanticInsights {
                energy_domain_items: energy_domain_items(&all_items, tables),
                business_opportunities: basic.business.iter().map(business_opportunity).collect(),
                risk_clusters: risk_clusters(&basic.risiken),
            },
            intelligent_prioritization: IntelligentPrioritization {
                critical_path: basic
                    .risiken
                    .iter()
                    .filter(|r| r.is_high_priority())
                    .map(critical_path_entry)
                    .collect(),
                work_life_balance: all_items
                    .iter()
                    .filter(|i| contains_any(&i.text, WORK_LIFE_BALANCE_TERMS))
                    .map(|i| WorkLifeBalanceEntry {
                        item: i.text.clone(),
                        balance_impact: BalanceImpact::Positive,
                        recommendation: "Time-blocking für Work-Life Integration".to_string(),
                    })
                    .collect(),
                regulatory_urgency: basic.risiken.iter().map(regulatory_entry).collect(),
            },
            predictive_recommendations: recommendations(basic),
            performance_metrics: performance_metrics(basic, &all_items),
        }
    }
}

fn energy_domain_items(all_items: &[&Item], tables: &KeywordTables) -> Vec<EnergyDomainItem> {
    let detected: Vec<EnergyDomainItem> = all_items
        .iter()
        .filter(|i| tables.matches(TableName::Energy, &i.text))
        .map(|i| EnergyDomainItem {
            text: i.text.clone(),
            insight: Some("Direkt aus Ihren Eingabedaten erkannt".to_string()),
            business_potential: "Konkretes Business-Potenzial im Energiesektor".to_string(),
            source: InsightSource::Detected,
        })
        .collect();

    if !detected.is_empty() {
        return detected;
    }

    vec![
        EnergyDomainItem {
            text: "Smart Grid Implementation".to_string(),
            insight: Some("Core infrastructure transformation".to_string()),
            business_potential: "Consulting opportunity for other utilities".to_string(),
            source: InsightSource::Static,
        },
        EnergyDomainItem {
            text: "Energy Forecasting ML".to_string(),
            insight: Some("Direct operational improvement".to_string()),
            business_potential: "Proprietary algorithm development".to_string(),
            source: InsightSource::Static,
        },
    ]
}

fn business_opportunity(item: &Item) -> BusinessOpportunity {
    let monetization_potential = if item.confidence > 0.7 {
        "High potential - konkrete Anwendungsfälle erkannt"
    } else {
        "Medium potential"
    };
    let effort = if item.is_high_priority() { "low" } else { "medium" };

    BusinessOpportunity {
        text: item.text.clone(),
        monetization_potential: monetization_potential.to_string(),
        effort: Some(effort.to_string()),
    }
}

fn risk_clusters(risks: &[Item]) -> Vec<RiskCluster> {
    if risks.is_empty() {
        return Vec::new();
    }

    let severity = if risks.iter().any(Item::is_high_priority) {
        Severity::Critical
    } else {
        Severity::High
    };

    vec![RiskCluster {
        cluster: "KI Governance & Compliance".to_string(),
        items: risks.iter().map(|r| r.text.clone()).collect(),
        severity,
    }]
}

fn critical_path_entry(item: &Item) -> CriticalPathEntry {
    let deadline = if item.mentions(TOMORROW_TOKEN) {
        "TOMORROW"
    } else if item.mentions(OPEN_TOKEN) {
        "ASAP"
    } else {
        "This week"
    };

    CriticalPathEntry {
        item: item.text.clone(),
        reasoning: "High-priority compliance/risk item - KI-Governance kritisch".to_string(),
        deadline: deadline.to_string(),
    }
}

fn regulatory_entry(item: &Item) -> RegulatoryEntry {
    RegulatoryEntry {
        item: item.text.clone(),
        compliance_risk: if item.is_high_priority() {
            ComplianceRisk::Critical
        } else {
            ComplianceRisk::Medium
        },
        action: if item.mentions(OPEN_TOKEN) {
            "Schedule immediately"
        } else {
            "Plan within sprint"
        }
        .to_string(),
    }
}

fn count_confidence(base: u32, count: usize) -> u32 {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    base.saturating_add(count.saturating_mul(8))
        .min(MAX_RECOMMENDATION_CONFIDENCE)
}

fn recommendations(basic: &BasicAnalysis) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if !basic.business.is_empty() {
        let keywords: Vec<&str> = basic
            .business
            .iter()
            .flat_map(|b| b.matched_keywords.iter().map(String::as_str))
            .take(3)
            .collect();
        recommendations.push(Recommendation {
            kind: RecommendationType::Strategic,
            title: "BUSINESS OPPORTUNITIES DETECTED".to_string(),
            message: format!(
                "{} Business-Items gefunden. KI-Beratung & Anwendungsfälle zeigen Monetarisierungspotential.",
                basic.business.len()
            ),
            confidence: count_confidence(60, basic.business.len()),
            basis: format!("Erkannte Business-Keywords: {}", keywords.join(", ")),
        });
    }

    if basic.risiken.len() > 1 {
        recommendations.push(Recommendation {
            kind: RecommendationType::Risk,
            title: "COMPLIANCE & GOVERNANCE CLUSTER".to_string(),
            message: format!(
                "{} Risiko-Items erkannt. KI-Governance wird kritisch wichtig.",
                basic.risiken.len()
            ),
            confidence: count_confidence(70, basic.risiken.len()),
            basis: "Pain Points & Compliance-Keywords in Ihren Daten erkannt".to_string(),
        });
    }

    let action_items = basic.todos.len() + basic.business.len();
    if basic.knowledge.len() > action_items {
        recommendations.push(Recommendation {
            kind: RecommendationType::Performance,
            title: "LEARNING-TO-ACTION IMBALANCE".to_string(),
            message: "Viel KI-Wissen (Prompting, Governance) aber wenig konkrete Umsetzung. Action-Items priorisieren!"
                .to_string(),
            confidence: 85,
            basis: format!(
                "Knowledge Items ({}) > Action Items ({})",
                basic.knowledge.len(),
                action_items
            ),
        });
    }

    if basic.termine.len() >= 4 {
        recommendations.push(Recommendation {
            kind: RecommendationType::Strategic,
            title: "NETWORKING & PARTNERSHIP MOMENTUM".to_string(),
            message: format!(
                "{} Termine erkannt. Starkes Netzwerk für KI-Business-Development nutzen!",
                basic.termine.len()
            ),
            confidence: 90,
            basis: "Termine mit Stadtwerke, Beraterfirmen, und KI-Akademie erkannt".to_string(),
        });
    }

    recommendations
}

/// `round(part / total * 100)`, or `default` when there are no items
fn percentage(part: usize, total: usize, default: u32) -> u32 {
    if total == 0 {
        return default;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

fn performance_metrics(basic: &BasicAnalysis, all_items: &[&Item]) -> PerformanceMetrics {
    let total = basic.total_items();
    let feedback = &basic.categorization_feedback;

    PerformanceMetrics {
        knowledge_to_action_ratio: percentage(basic.knowledge.len(), total, 0),
        business_focus_score: percentage(basic.business.len(), total, 0),
        risk_management_coverage: percentage(basic.risiken.len(), total, 0),
        work_life_integration: if all_items.iter().any(|i| contains_any(&i.text, WELLBEING_TERMS)) {
            80
        } else {
            40
        },
        categorization_accuracy: percentage(
            total.saturating_sub(feedback.low_confidence.len()),
            total,
            90,
        ),
        keyword_coverage: percentage(total.saturating_sub(feedback.uncategorized.len()), total, 100),
    }
}
