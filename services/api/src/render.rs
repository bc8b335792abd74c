use crate::infra::diagnosis_service;
use clap::Args;
use smart_guarantee::diagnosis::report::{format_currency, format_percentage};
use smart_guarantee::diagnosis::{
    BatchDiagnosis, BatchOutcome, DiagnosisDraft, DiagnosisReport, DiagnosisService,
};
use smart_guarantee::error::AppError;
use std::path::PathBuf;
use std::time::Duration;

const RANKED_INDUSTRIES: usize = 5;

#[derive(Args, Debug, Default)]
pub(crate) struct DiagnoseArgs {
    /// Industry id from the catalog (1-15, see `industries`)
    #[arg(long)]
    pub(crate) industry: Option<i64>,
    /// Monthly average revenue in won
    #[arg(long)]
    pub(crate) revenue: Option<i64>,
    /// Years in business (0.5 or more)
    #[arg(long)]
    pub(crate) business_period: Option<f64>,
    /// Credit rating, 1 (best) to 10 (worst)
    #[arg(long)]
    pub(crate) credit_rating: Option<i64>,
    /// Outstanding loan balance in won
    #[arg(long)]
    pub(crate) existing_debt: Option<i64>,
    /// Whether real-estate collateral is available (true/false)
    #[arg(long)]
    pub(crate) collateral: Option<bool>,
    /// Requested guarantee amount in won
    #[arg(long)]
    pub(crate) requested_amount: Option<i64>,
    /// Print the full report as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl DiagnoseArgs {
    pub(crate) fn to_draft(&self) -> DiagnosisDraft {
        DiagnosisDraft {
            industry: self.industry,
            revenue: self.revenue,
            business_period: self.business_period,
            credit_rating: self.credit_rating,
            existing_debt: self.existing_debt,
            has_collateral: self.collateral,
            requested_amount: self.requested_amount,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one questionnaire per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print per-row outcomes as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

fn cli_service() -> DiagnosisService {
    diagnosis_service(Duration::ZERO)
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let service = cli_service();
    let report = service.diagnose(args.to_draft())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report_lines(&report) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = cli_service();
    let file = std::fs::File::open(&args.csv)?;
    let batch = service.import_csv(file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        println!("일괄 진단: {}", args.csv.display());
        for line in batch_lines(&batch) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn run_industries() -> Result<(), AppError> {
    let service = cli_service();
    println!("업종 목록");
    for profile in service.reference().industries.iter() {
        println!(
            "- {:>2} {} | 평균 승인률 {}% | {} 등급 | 보증료 {:+.1}%p",
            profile.id.0,
            profile.name,
            profile.avg_approval_rate,
            profile.risk_level.label(),
            profile.fee_adjustment
        );
        println!("     {}", profile.description);
    }
    Ok(())
}

pub(crate) fn run_stats() -> Result<(), AppError> {
    let service = cli_service();
    let stats = &service.reference().statistics;

    println!("보증 승인 통계");
    println!(
        "- 오늘 진단 수 {}건 | 이달 신청 건수 {}건",
        stats.total_diagnosis_today, stats.total_applications_this_month
    );
    println!(
        "- 평균 처리기간 {:.1}일 | 평균 승인금액 {}",
        stats.average_approval_days,
        format_currency(stats.average_approval_amount)
    );
    println!("- 최다 신청 금액: {}", stats.most_requested_amount);
    println!(
        "- 지난 1시간 진단 {}건 | 피크 시간대 {} | 최다 이용일 {}",
        stats.recent_activity.last_hour_diagnosis,
        stats.recent_activity.peak_hours,
        stats.recent_activity.most_active_day
    );

    println!("승인률 TOP 5:");
    for stat in stats.top_industries(RANKED_INDUSTRIES) {
        println!("  - {}: {:.1}% ({}건)", stat.industry, stat.rate, stat.count);
    }
    println!("개선 필요 업종 TOP 5:");
    for stat in stats.bottom_industries(RANKED_INDUSTRIES) {
        println!("  - {}: {:.1}% ({}건)", stat.industry, stat.rate, stat.count);
    }
    println!("신청금액별 성공률:");
    for band in &stats.success_rate_by_amount {
        println!(
            "  - {}: {:.1}% ({}건, {})",
            band.range,
            band.rate,
            band.count,
            band.tone().color()
        );
    }
    println!("전체 업종 신청 건수: {}건", stats.total_industry_applications());
    Ok(())
}

fn report_lines(report: &DiagnosisReport) -> Vec<String> {
    let display = &report.display;
    let mut lines = vec![
        "보증 진단 결과".to_string(),
        format!(
            "- 보증 승인 확률 {} | {} ({})",
            display.approval_probability,
            display.risk_grade,
            display.tone.color()
        ),
        format!(
            "- 예상 보증한도 {} | 적용 보증료율 {}",
            display.guarantee_limit, display.guarantee_fee_rate
        ),
        format!("- {}: {}", display.industry, report.comparison_summary),
        format!(
            "- 월 평균 매출 {} | 사업 기간 {} | 신용등급 {}",
            display.revenue, display.business_period, display.credit_rating
        ),
        format!(
            "- 기존 대출 {} | 담보 {} | 신청 희망금액 {}",
            display.existing_debt, display.collateral, display.requested_amount
        ),
        "항목별 점수:".to_string(),
    ];

    for component in &report.breakdown.components {
        lines.push(format!(
            "  - {}: {:.1} x {:.2} = {:.2}",
            component.factor.label(),
            component.score,
            component.weight,
            component.weighted
        ));
    }

    let recommendation = &report.recommendation;
    lines.push(format!("{}: {}", recommendation.title, recommendation.message));
    lines.push("추천 행동사항:".to_string());
    for action in &recommendation.actions {
        lines.push(format!("  - {action}"));
    }
    lines.push("개선 팁:".to_string());
    for tip in &recommendation.tips {
        lines.push(format!("  - {tip}"));
    }
    if let Some(alternatives) = &recommendation.alternatives {
        lines.push("대안 금융상품:".to_string());
        for product in alternatives {
            lines.push(format!(
                "  - {} ({}, 최대 {}): {}",
                product.name, product.rate, product.max_amount, product.description
            ));
        }
    }
    lines
}

fn batch_lines(batch: &BatchDiagnosis) -> Vec<String> {
    let mut lines: Vec<String> = batch
        .rows
        .iter()
        .map(|row| match &row.outcome {
            BatchOutcome::Scored { result } => format!(
                "- {}행: {}% {} 등급 | 한도 {} | 보증료율 {}",
                row.line,
                result.approval_probability,
                result.risk_level.label(),
                format_currency(result.guarantee_limit),
                format_percentage(result.guarantee_fee_rate)
            ),
            BatchOutcome::Rejected { errors } => {
                let reasons: Vec<String> = errors
                    .to_messages()
                    .into_iter()
                    .map(|(field, message)| format!("{field} {message}"))
                    .collect();
                format!("- {}행: 거절 ({})", row.line, reasons.join("; "))
            }
        })
        .collect();

    lines.push(format!(
        "진단 {}건 | 거절 {}건",
        batch.scored(),
        batch.rejected()
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> DiagnoseArgs {
        DiagnoseArgs {
            industry: Some(2),
            revenue: Some(20_000_000),
            business_period: Some(3.0),
            credit_rating: Some(3),
            existing_debt: Some(5_000_000),
            collateral: Some(false),
            requested_amount: Some(150_000_000),
            json: false,
        }
    }

    #[test]
    fn report_lines_summarize_the_result() {
        let report = cli_service().diagnose(args().to_draft()).expect("valid");
        let lines = report_lines(&report);

        assert_eq!(lines[0], "보증 진단 결과");
        assert_eq!(lines[1], "- 보증 승인 확률 77% | B 등급 (blue)");
        assert_eq!(lines[2], "- 예상 보증한도 7400만원 | 적용 보증료율 2.1%");
        assert_eq!(lines[3], "- 소매업: 업종 평균보다 7%p 높습니다!");
        assert!(lines.iter().any(|line| line.starts_with("  - 신용등급: 80.0")));
    }

    #[test]
    fn diagnose_rejects_missing_answers() {
        let err = run_diagnose(DiagnoseArgs::default()).expect_err("nothing answered");
        assert!(matches!(err, AppError::Validation(ref errors) if errors.len() == 7));
    }

    #[test]
    fn batch_lines_cover_each_row() {
        let csv = "industry,revenue,business_period,credit_rating,existing_debt,has_collateral,requested_amount\n\
1,10000000,1,5,0,true,30000000\n\
1,10000000,1,5,0,true,10\n";
        let batch = cli_service().import_csv(csv.as_bytes()).expect("csv parses");
        let lines = batch_lines(&batch);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "- 1행: 72% C 등급 | 한도 2600만원 | 보증료율 2.0%");
        assert_eq!(
            lines[1],
            "- 2행: 거절 (requested_amount must be at least 1,000,000)"
        );
        assert_eq!(lines[2], "진단 1건 | 거절 1건");
    }
}
