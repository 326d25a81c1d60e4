//! Baked-in example task dump.

/// Twenty mixed German/English task lines from an energy-utility AI strategist
pub const EXAMPLE_CONTENT: &str = "KI-Strategieplan für Q2 finalisieren - regulatorische Deadline 15. März
Meeting mit Stadtwerke-Vorstand Donnerstag 14:00 - Digitalisierungsbudget verhandeln
Research: Machine Learning für Energieprognosen - Wettbewerbsvorteil schaffen
Mindfulness Session nach stressigem Arbeitstag einplanen - Work-Life Balance
Business Idee: KI-Prompting Kurse für Studenten entwickeln - Nebeneinkommen
Compliance Audit: GDPR für neue KI-Tools - Rechtsrisiko minimieren
Innovation Lab Kick-off Freitag - Blockchain für Smart Grid evaluieren
Deep Learning Workshop buchen - Skillbuilding für Energieprognosen
Datenschutz-Impact-Assessment für ML-Algorithmen vorbereiten - kritisch
Call IT-Security 16:30 - KI-Governance Framework definieren
Renewable Energy Forecasting Paper lesen - technisches Wissen erweitern
Legacy System Integration Problem - KI-Tools Kompatibilität prüfen
Business Plan Draft: KI-Beratung für kleinere Stadtwerke erstellen
Yoga Session heute Abend - Stressmanagement nach anspruchsvollem Tag
Risikomanagement Quarterly Review vorbereiten - Vorstandspräsentation
Marktanalyse: Energy-AI-Solutions Competitive Landscape
Stadtwerke Roadmap Meeting - Transformation Strategy diskutieren
Regulatory Report BNetzA Meldung fertigstellen - deadline morgen
Student anfragen: Masterarbeit über KI im Energiesektor betreuen
Prompt Engineering Guide für Energiebranche schreiben - Content Marketing";
