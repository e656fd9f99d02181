// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::api_server::{AppError, AppState};
use crate::chart;
use crate::contact::{ContactMessage, ContactNotice};
use crate::content::{
    self, BlogCard, Hero, RoadmapStep, SolutionCard, SolutionTopic, TopicPage, Video,
};
use crate::footprint::{self, FootprintInput, Recommendation, TransportMode};
use crate::theme::{safe_return_path, PageContext, Theme};

// ============================================================================
// Shared helpers
// ============================================================================

/// Theme from the cookie, else the configured default
fn current_theme(state: &AppState, headers: &HeaderMap) -> Theme {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(Theme::from_cookie_header)
        .unwrap_or(state.config.default_theme)
}

fn page_context(state: &AppState, headers: &HeaderMap, path: &str) -> PageContext {
    PageContext::new(
        &state.config.site_name,
        current_theme(state, headers),
        path,
        &state.config.public_url,
    )
}

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub hero: &'static Hero,
    pub solutions: &'static [SolutionCard],
}

pub async fn home_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    render(&HomeTemplate {
        page: page_context(&state, &headers, "/"),
        hero: &content::HERO,
        solutions: content::HOME_SOLUTIONS,
    })
}

// ============================================================================
// Carbon Footprint Calculator
// ============================================================================

/// Raw calculator fields as typed into the form
#[derive(Debug, Default, Deserialize)]
pub struct CalculatorQuery {
    pub daily_distance_km: Option<String>,
    pub transport_mode: Option<String>,
    pub monthly_electricity_kwh: Option<String>,
    pub weekly_waste_kg: Option<String>,
    pub weekly_meat_kg: Option<String>,
}

/// Blank or unparsable numbers count as zero
fn coerce_number(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

impl CalculatorQuery {
    pub fn to_input(&self) -> FootprintInput {
        FootprintInput {
            daily_distance_km: coerce_number(self.daily_distance_km.as_deref()),
            transport_mode: self
                .transport_mode
                .as_deref()
                .and_then(|m| m.parse().ok())
                .unwrap_or_default(),
            monthly_electricity_kwh: coerce_number(self.monthly_electricity_kwh.as_deref()),
            weekly_waste_kg: coerce_number(self.weekly_waste_kg.as_deref()),
            weekly_meat_kg: coerce_number(self.weekly_meat_kg.as_deref()),
        }
    }
}

pub struct ModeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

pub struct SliceRow {
    pub label: &'static str,
    pub color: &'static str,
    pub amount: String,
    pub percent: String,
}

/// Figures rendered in the results panel
pub struct ResultsView {
    pub total_monthly: String,
    pub yearly_tons: String,
    pub status_message: &'static str,
    pub above_average: bool,
    pub chart_svg: String,
    pub rows: Vec<SliceRow>,
    pub recommendations: &'static [Recommendation],
}

impl ResultsView {
    pub fn new(input: &FootprintInput) -> Self {
        let result = footprint::estimate(input);
        let status = result.status();
        let rows = chart::slices(&result)
            .into_iter()
            .map(|slice| SliceRow {
                label: slice.label,
                color: slice.color,
                amount: format!("{:.2}", slice.value),
                percent: slice.percent_label(),
            })
            .collect();

        Self {
            total_monthly: format!("{:.2}", result.total_monthly),
            yearly_tons: format!("{:.2}", result.yearly_tons),
            status_message: status.message(),
            above_average: status == footprint::FootprintStatus::AboveAverage,
            chart_svg: chart::pie_chart(&result),
            rows,
            recommendations: footprint::recommendations(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/calculator.html")]
pub struct CalculatorTemplate {
    pub page: PageContext,
    pub distance: String,
    pub electricity: String,
    pub waste: String,
    pub meat: String,
    pub modes: Vec<ModeOption>,
    pub results: ResultsView,
}

#[derive(Template)]
#[template(path = "partials/calculator_results.html")]
pub struct CalculatorResultsTemplate {
    pub results: ResultsView,
}

/// Full page, or just the results panel when htmx asks on input change
pub async fn calculator_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    HxRequest(partial): HxRequest,
    Query(query): Query<CalculatorQuery>,
) -> Result<Html<String>, AppError> {
    let input = query.to_input();
    let results = ResultsView::new(&input);

    if partial {
        return render(&CalculatorResultsTemplate { results });
    }

    let modes = TransportMode::ALL
        .iter()
        .map(|mode| ModeOption {
            value: mode.as_str(),
            label: mode.label(),
            selected: *mode == input.transport_mode,
        })
        .collect();

    render(&CalculatorTemplate {
        page: page_context(&state, &headers, "/calculator"),
        distance: input.daily_distance_km.to_string(),
        electricity: input.monthly_electricity_kwh.to_string(),
        waste: input.weekly_waste_kg.to_string(),
        meat: input.weekly_meat_kg.to_string(),
        modes,
        results,
    })
}

// ============================================================================
// Informational Pages
// ============================================================================

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub page: PageContext,
    pub heading: &'static str,
    pub intro: &'static str,
    pub videos: &'static [Video],
    pub blogs: &'static [BlogCard],
}

pub async fn about_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    render(&AboutTemplate {
        page: page_context(&state, &headers, "/about"),
        heading: content::ABOUT_HEADING,
        intro: content::ABOUT_INTRO,
        videos: content::VIDEOS,
        blogs: content::BLOGS,
    })
}

#[derive(Template)]
#[template(path = "pages/resources.html")]
pub struct ResourcesTemplate {
    pub page: PageContext,
    pub heading: &'static str,
    pub intro: &'static str,
    pub steps: &'static [RoadmapStep],
}

pub async fn resources_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    render(&ResourcesTemplate {
        page: page_context(&state, &headers, "/resources"),
        heading: content::ROADMAP_HEADING,
        intro: content::ROADMAP_INTRO,
        steps: content::ROADMAP,
    })
}

#[derive(Template)]
#[template(path = "pages/solution.html")]
pub struct SolutionTemplate {
    pub page: PageContext,
    pub topic: &'static TopicPage,
}

pub async fn solution_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let path = format!("/solutions/{}", slug);
    match slug.parse::<SolutionTopic>() {
        Ok(topic) => Ok(render(&SolutionTemplate {
            page: page_context(&state, &headers, &path),
            topic: topic.page(),
        })?
        .into_response()),
        Err(e) => {
            tracing::debug!("{}", e);
            not_found(&state, &headers, &path)
        }
    }
}

// ============================================================================
// Contact
// ============================================================================

#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub page: PageContext,
    pub form: ContactMessage,
    pub has_notice: bool,
    pub notice_success: bool,
    pub notice_text: String,
}

impl ContactTemplate {
    fn new(page: PageContext, form: ContactMessage, notice: Option<ContactNotice>) -> Self {
        let (has_notice, notice_success, notice_text) = match notice {
            Some(n) => (true, n.is_success(), n.text().to_string()),
            None => (false, false, String::new()),
        };
        Self {
            page,
            form,
            has_notice,
            notice_success,
            notice_text,
        }
    }
}

pub async fn contact_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    render(&ContactTemplate::new(
        page_context(&state, &headers, "/contact"),
        ContactMessage::default(),
        None,
    ))
}

/// Validate, relay, and re-render with a notice. The form is cleared only on success.
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(submitted): Form<ContactMessage>,
) -> Result<Response, AppError> {
    let page = page_context(&state, &headers, "/contact");

    let message = match submitted.validate() {
        Ok(message) => message,
        Err(e) => {
            let html = render(&ContactTemplate::new(
                page,
                submitted,
                Some(ContactNotice::Invalid(e.to_string())),
            ))?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response());
        }
    };

    match state.relay.submit(&message).await {
        Ok(()) => {
            let html = render(&ContactTemplate::new(
                page,
                ContactMessage::default(),
                Some(ContactNotice::Sent),
            ))?;
            Ok(html.into_response())
        }
        Err(e) => {
            tracing::warn!("Contact submission failed: {}", e);
            let html = render(&ContactTemplate::new(page, message, Some(ContactNotice::Failed)))?;
            Ok((StatusCode::BAD_GATEWAY, html).into_response())
        }
    }
}

// ============================================================================
// Theme Toggle
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ToggleQuery {
    return_to: Option<String>,
}

/// Flip the theme cookie and go back where the visitor came from
pub async fn toggle_theme(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ToggleQuery>,
) -> impl IntoResponse {
    let next = current_theme(&state, &headers).toggled();
    let target = safe_return_path(query.return_to.as_deref());
    (
        [(header::SET_COOKIE, next.set_cookie_value())],
        Redirect::to(target),
    )
}

// ============================================================================
// Not Found
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub page: PageContext,
}

fn not_found(state: &AppState, headers: &HeaderMap, path: &str) -> Result<Response, AppError> {
    let html = render(&NotFoundTemplate {
        page: page_context(state, headers, path),
    })?;
    Ok((StatusCode::NOT_FOUND, html).into_response())
}

pub async fn not_found_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: axum::http::Uri,
) -> Result<Response, AppError> {
    not_found(&state, &headers, uri.path())
}
