use crate::infra::{parse_project_id, parse_rupees, AnalysisService, CatalogService, Services};
use campus_hub::catalog::router::FEATURED_COUNT;
use campus_hub::catalog::{ProjectCardView, ProjectDetailView, ProjectFilter, ProjectId};
use campus_hub::config::AnalysisConfig;
use campus_hub::error::AppError;
use campus_hub::vehicle::fixtures::DEMO_REPORT_ID;
use campus_hub::vehicle::pricing::format_axis_price;
use campus_hub::vehicle::{format_rupees, AnalysisRequest, ReportAssessment, ReportId, VehicleForm};

#[derive(clap::Args, Debug, Default)]
pub(crate) struct ProjectListArgs {
    /// Case-insensitive text matched against titles and descriptions
    #[arg(long, default_value = "")]
    pub(crate) query: String,
    /// Restrict to projects carrying any of these tags (repeatable)
    #[arg(long = "tag")]
    pub(crate) tags: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub(crate) struct ProjectShowArgs {
    /// Numeric project id
    #[arg(value_parser = parse_project_id)]
    pub(crate) id: u32,
}

#[derive(clap::Args, Debug)]
pub(crate) struct VehicleReportArgs {
    /// Report identifier
    #[arg(long, default_value = DEMO_REPORT_ID)]
    pub(crate) id: String,
    /// Replace the seller's quoted price (rupees)
    #[arg(long, value_parser = parse_rupees)]
    pub(crate) quoted_price: Option<u64>,
}

#[derive(clap::Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Query used for the project search step
    #[arg(long, default_value = "campus")]
    pub(crate) query: String,
    /// Skip the vehicle analysis portion of the demo.
    #[arg(long)]
    pub(crate) skip_vehicle: bool,
}

fn cli_services() -> Result<Services, AppError> {
    Services::in_memory(AnalysisConfig::immediate())
}

pub(crate) fn run_project_list(args: ProjectListArgs) -> Result<(), AppError> {
    let services = cli_services()?;
    let filter = ProjectFilter::new(args.query).with_tags(args.tags);
    render_search(&services.catalog, &filter)
}

pub(crate) fn run_project_show(args: ProjectShowArgs) -> Result<(), AppError> {
    let services = cli_services()?;
    let project = services.catalog.find(ProjectId(args.id))?;
    render_project_detail(&project.detail());
    Ok(())
}

pub(crate) async fn run_vehicle_report(args: VehicleReportArgs) -> Result<(), AppError> {
    let services = cli_services()?;
    let assessment = load_assessment(&services.analysis, &args.id, args.quoted_price).await?;
    render_assessment(&assessment);
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let services = cli_services()?;

    println!("Campus Hub demo");
    println!("Available tags: {}", services.catalog.tags().join(", "));

    println!("\nFeatured projects");
    for card in featured_cards(&services.catalog)? {
        render_project_card(&card);
    }

    println!("\nSearch for \"{}\"", args.query);
    render_search(&services.catalog, &ProjectFilter::new(args.query.clone()))?;

    let mut filter = ProjectFilter::new(String::new());
    filter.toggle_tag("IoT");
    println!("\nProjects tagged IoT");
    render_search(&services.catalog, &filter)?;

    if args.skip_vehicle {
        return Ok(());
    }

    println!("\nVehicle analyzer demo");
    let assessment = load_assessment(&services.analysis, DEMO_REPORT_ID, None).await?;
    render_assessment(&assessment);

    println!("\nSubmitting a new analysis");
    let request = AnalysisRequest {
        image_names: vec!["front.jpg".to_string(), "odometer.png".to_string()],
        vehicle: VehicleForm {
            make: "Maruti Suzuki".to_string(),
            model: "Swift".to_string(),
            year: "2020".to_string(),
            mileage: "38000".to_string(),
            number_plate: "GJ05CD6789".to_string(),
            seller_price: Some("540000".to_string()),
            description: None,
        },
    };
    match services.analysis.submit(request).await {
        Ok(ticket) => {
            println!(
                "  Accepted as {} ({} image(s))",
                ticket.report_id, ticket.images_accepted
            );
            let assessment = services.analysis.assessment(&ticket.report_id).await?;
            println!(
                "  {}: overall {} ({}), {}",
                assessment.title,
                assessment.scores.overall.score,
                assessment.recommendation,
                assessment
                    .pricing
                    .badge_label
                    .as_deref()
                    .unwrap_or("no seller quote")
            );
        }
        Err(err) => println!("  Submission rejected: {err}"),
    }

    Ok(())
}

async fn load_assessment(
    service: &AnalysisService,
    id: &str,
    quoted_price: Option<u64>,
) -> Result<ReportAssessment, AppError> {
    let mut report = service.report(&ReportId::from(id)).await?;
    if let Some(price) = quoted_price {
        report.vehicle_details.seller_price = Some(price.to_string());
    }
    Ok(service.assess(&report))
}

/// Same selection the landing page route serves.
fn featured_cards(catalog: &CatalogService) -> Result<Vec<ProjectCardView>, AppError> {
    Ok(catalog
        .featured(FEATURED_COUNT)?
        .iter()
        .map(ProjectCardView::from)
        .collect())
}

fn render_search(catalog: &CatalogService, filter: &ProjectFilter) -> Result<(), AppError> {
    let search = catalog.search(filter)?;
    if let Some(message) = search.outcome.message() {
        println!("  {message}");
    }
    for project in &search.projects {
        render_project_card(&project.card());
    }
    Ok(())
}

fn render_project_card(card: &ProjectCardView) {
    let overflow = match card.hidden_member_count {
        0 => String::new(),
        hidden => format!(" +{hidden}"),
    };
    println!(
        "- [{}] {} (team {}{}, due {})",
        card.id, card.title, card.capacity, overflow, card.deadline
    );
    println!("    {}", card.tags.join(" · "));
}

fn render_project_detail(detail: &ProjectDetailView) {
    println!("{} (#{})", detail.title, detail.id);
    println!(
        "Posted {} | Deadline {} | Progress {}%",
        detail.posted_on, detail.deadline, detail.progress
    );
    println!("Tags: {}", detail.tags.join(", "));
    println!("\n{}", detail.about);

    println!("\nRequirements");
    for requirement in &detail.requirements {
        println!("- {requirement}");
    }

    println!(
        "\nTeam ({}/{}, {} open slot(s))",
        detail.team_members.len(),
        detail.team_size,
        detail.open_slots
    );
    for member in &detail.team_members {
        println!("- {} ({})", member.name, member.role);
    }

    println!(
        "\nContact: {}, {} <{}>",
        detail.contact.name, detail.contact.department, detail.contact.email
    );
}

fn render_assessment(assessment: &ReportAssessment) {
    let scores = &assessment.scores;
    println!("{} [{}]", assessment.title, assessment.report_id);
    println!("Plate: {}", assessment.vehicle.number_plate);
    for card in [&scores.visual, &scores.legal, &scores.overall] {
        println!(
            "  {:<17} {:>3}/100  {} ({})",
            card.title,
            card.score,
            card.tier.label(),
            card.description
        );
    }

    let pricing = &assessment.pricing;
    println!("\nPricing");
    println!(
        "  Suggested {} (market {} - {})",
        format_rupees(pricing.suggested_price as f64),
        format_axis_price(pricing.market.min as f64),
        format_axis_price(pricing.market.max as f64)
    );
    match pricing.quoted_price {
        Some(quoted) => println!(
            "  Seller quote {} -> {}",
            format_rupees(quoted),
            pricing.badge_label.as_deref().unwrap_or("n/a")
        ),
        None => println!("  Seller quote: not provided"),
    }
    println!("  Tip: {}", pricing.bargaining_tip);

    let legal = &assessment.legal;
    println!("\nLegal");
    println!("  Owner: {} (registered {})", legal.owner_name, legal.registration_date);
    match legal.insurance_expiry {
        Some(expiry) => println!("  Insurance valid until {expiry}"),
        None if legal.insurance_valid => println!("  Insurance valid"),
        None => println!("  Insurance expired"),
    }
    println!(
        "  Fines: {} totalling {}",
        legal.fine_count,
        format_rupees(legal.total_fines as f64)
    );
    if let Some(alert) = legal.stolen_alert {
        println!("  ALERT: {alert}");
    }
    println!("  {}", legal.narrative);

    println!("\nIssues ({} total)", assessment.issues.total);
    for category in &assessment.issues.categories {
        if category.is_clean() {
            println!("  {}: no issues found", category.label);
            continue;
        }
        println!("  {} ({})", category.label, category.count);
        for item in &category.items {
            println!("    - {item}");
        }
    }

    let images = &assessment.images;
    println!(
        "\nImages: {} analysed, markers high {} / medium {} / low {}",
        images.images.len(),
        images.high,
        images.medium,
        images.low
    );
}
