//! Non-interactive output of a render pass as text, JSON or CSV

use crate::router::{Page, PageView, RenderPass};
use crate::screens::{format_usd, page_header, skill_analysis};
use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;
use trendhire_core::types::{Notice, NoticeLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

#[derive(Serialize)]
struct Report<'a> {
    generated_at: String,
    page: Page,
    view: Option<&'a PageView>,
    notices: &'a [Notice],
}

pub fn write_report<W: Write>(out: &mut W, pass: &RenderPass, format: ReportFormat) -> Result<()> {
    log::debug!("Writing {:?} report for {}", format, pass.page.label());

    match format {
        ReportFormat::Text => write_text(out, pass),
        ReportFormat::Json => write_json(out, pass),
        ReportFormat::Csv => write_csv(out, pass),
    }
}

fn write_json<W: Write>(out: &mut W, pass: &RenderPass) -> Result<()> {
    let report = Report {
        generated_at: chrono::Local::now().to_rfc3339(),
        page: pass.page,
        view: pass.view.as_ref(),
        notices: &pass.notices,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, pass: &RenderPass) -> Result<()> {
    let view = match &pass.view {
        Some(view) => view,
        None => bail!("{} produced no data: {}", pass.page.label(), reason(pass)),
    };

    let mut writer = csv::Writer::from_writer(out);
    match view {
        PageView::TrendingJobs(view) => {
            writer.write_record(["title", "growth", "avg_salary", "demand"])?;
            for job in &view.jobs {
                writer.write_record([
                    job.title.clone(),
                    job.growth.to_string(),
                    job.avg_salary.to_string(),
                    job.demand.to_string(),
                ])?;
            }
        }
        PageView::SkillAnalysis(view) => {
            writer.write_record(["skill", "score"])?;
            for score in &view.profile.skill_scores {
                writer.write_record([score.skill.clone(), score.score.to_string()])?;
            }
        }
        PageView::LearningPaths(view) => {
            writer.write_record(["step", "course", "provider", "duration", "rating", "price"])?;
            for (i, step) in view.steps.iter().enumerate() {
                writer.write_record([
                    (i + 1).to_string(),
                    step.course.clone(),
                    step.provider.clone(),
                    step.duration.clone(),
                    format!("{:.1}", step.rating),
                    step.price.clone(),
                ])?;
            }
        }
        PageView::SalaryTrends(view) => {
            writer.write_record(["month", "salary"])?;
            for point in &view.series {
                writer.write_record([point.month.clone(), point.salary.to_string()])?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

fn reason(pass: &RenderPass) -> String {
    pass.notices
        .iter()
        .find(|n| n.level == NoticeLevel::Error)
        .map(|n| n.message.clone())
        .unwrap_or_else(|| "required input is empty".to_string())
}

fn level_tag(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "INFO",
        NoticeLevel::Warning => "WARNING",
        NoticeLevel::Error => "ERROR",
    }
}

fn write_text<W: Write>(out: &mut W, pass: &RenderPass) -> Result<()> {
    writeln!(out, "{}", page_header(pass.page))?;
    writeln!(
        out,
        "Generated {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out)?;

    match &pass.view {
        Some(PageView::TrendingJobs(view)) => {
            writeln!(out, "Location: {}  Industry: {}", view.location, view.industry)?;
            writeln!(out)?;
            writeln!(
                out,
                "{:<28} {:>10} {:>12}  {}",
                "Title", "Growth (%)", "Avg Salary", "Demand"
            )?;
            for job in &view.jobs {
                writeln!(
                    out,
                    "{:<28} {:>10} {:>12}  {}",
                    job.title,
                    job.growth,
                    format_usd(job.avg_salary),
                    job.demand
                )?;
            }
        }
        Some(PageView::SkillAnalysis(view)) => {
            writeln!(out, "Your skills: {}", view.profile.current_skills.join(", "))?;
            writeln!(out)?;
            writeln!(out, "{:<20} {:>6}", "Skill", "Demand")?;
            for score in &view.profile.skill_scores {
                writeln!(out, "{:<20} {:>5}%", score.skill, score.score)?;
            }
        }
        Some(PageView::LearningPaths(view)) => {
            writeln!(out, "{}", view.heading())?;
            for section in view.sections() {
                writeln!(out)?;
                writeln!(out, "{}", section.title)?;
                for metric in &section.metrics {
                    writeln!(out, "  {:<10} {}", metric.label, metric.value)?;
                }
            }
        }
        Some(PageView::SalaryTrends(view)) => {
            writeln!(out, "{}", view.title)?;
            writeln!(out)?;
            for point in &view.series {
                writeln!(out, "  {:<4} {:>10}", point.month, format_usd(point.salary))?;
            }
            writeln!(out)?;
            for metric in &view.metrics {
                match &metric.delta {
                    Some(delta) => writeln!(out, "{}: {} ({})", metric.label, metric.value, delta)?,
                    None => writeln!(out, "{}: {}", metric.label, metric.value)?,
                }
            }
        }
        None if pass.notices.is_empty() => {
            writeln!(out, "Nothing to show: {}", reason(pass))?;
        }
        None => {}
    }

    if !pass.notices.is_empty() {
        writeln!(out)?;
        if pass.page == Page::SkillAnalysis && pass.view.is_some() {
            writeln!(out, "{}", skill_analysis::RECOMMENDATIONS_TITLE)?;
        }
        for notice in &pass.notices {
            writeln!(out, "[{}] {}", level_tag(notice.level), notice.message)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{render_pass, PageContext};
    use crate::session::Session;

    fn report(session: &Session, format: ReportFormat) -> Result<String> {
        let pass = render_pass(session, &PageContext::mock());
        let mut out = Vec::new();
        write_report(&mut out, &pass, format)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_trending_csv() {
        let text = report(&Session::new(), ReportFormat::Csv).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("title,growth,avg_salary,demand"));
        assert_eq!(lines.next(), Some("AI Safety Engineer,340,185000,Very High"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_skills_text_lists_warnings() {
        let mut session = Session::new();
        session.select_page(Page::SkillAnalysis);
        session.skills.skills.set("Python, React");

        let text = report(&session, ReportFormat::Text).unwrap();
        assert!(text.contains("Your skills: Python, React"));
        assert!(text.contains("[WARNING] Rust: Current level 10% - High priority for learning"));
        assert_eq!(text.matches("[WARNING]").count(), 5);
    }

    #[test]
    fn test_salary_json() {
        let mut session = Session::new();
        session.select_page(Page::SalaryTrends);
        session.salary.job_title.set("AI Engineer");

        let text = report(&session, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["page"], "salary_trends");
        assert_eq!(
            value["view"]["salary_trends"]["title"],
            "AI Engineer Salary Trend - San Francisco"
        );
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_csv_without_view_fails() {
        let mut session = Session::new();
        session.select_page(Page::LearningPaths);
        session.learning.target_role.select_value("Product Manager");

        let err = report(&session, ReportFormat::Csv).unwrap_err();
        assert!(err.to_string().contains("Product Manager"));
    }

    #[test]
    fn test_text_for_unsupported_role_shows_error() {
        let mut session = Session::new();
        session.select_page(Page::LearningPaths);
        session.learning.target_role.select_value("DevOps Engineer");

        let text = report(&session, ReportFormat::Text).unwrap();
        assert!(text.contains("[ERROR] No learning path available for role 'DevOps Engineer' yet"));
    }
}
