use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use urania::aspects::{AspectKind, AspectTable};
use urania::{AnalysisProfile, Ayanamsa, Body, BodySet, GeoLocation, HouseAnchor};

/// Environment variable naming an explicit profile file.
pub const PROFILE_ENV: &str = "URANIA_PROFILE";

const SEARCH_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileToml {
    #[serde(default)]
    ayanamsa: Option<String>,
    #[serde(default)]
    ayanamsa_deg: Option<f64>,
    #[serde(default)]
    obliquity_deg: Option<f64>,
    #[serde(default)]
    house_anchor: Option<HouseAnchor>,
    #[serde(default)]
    aspect_preset: Option<String>,
    #[serde(default)]
    symmetry_window_deg: Option<f64>,
    #[serde(default)]
    reference_body: Option<String>,
    #[serde(default)]
    focus_body: Option<String>,
    #[serde(default)]
    velocity_scale: Option<f64>,
    #[serde(default)]
    degree_scale: Option<f64>,
    #[serde(default)]
    resonance_threshold: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementModifiersToml {
    #[serde(default)]
    fire: Option<f64>,
    #[serde(default)]
    earth: Option<f64>,
    #[serde(default)]
    air: Option<f64>,
    #[serde(default)]
    water: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RetrogradeToml {
    #[serde(default)]
    base: Option<f64>,
    #[serde(default)]
    speed: Option<f64>,
    #[serde(default)]
    debilitated: Option<f64>,
    #[serde(default)]
    exalted: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct ObserverToml {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    profile: ProfileToml,
    /// Aspect id -> orb in degrees
    #[serde(default)]
    orbs: BTreeMap<String, f64>,
    /// Aspect id -> base weight
    #[serde(default)]
    weights: BTreeMap<String, f64>,
    /// Body id -> aggregate importance
    #[serde(default)]
    importance: BTreeMap<String, f64>,
    /// Body id -> mean daily motion in degrees
    #[serde(default)]
    mean_motion: BTreeMap<String, f64>,
    #[serde(default)]
    element_modifiers: ElementModifiersToml,
    #[serde(default)]
    retrograde: RetrogradeToml,
    #[serde(default)]
    observer: Option<ObserverToml>,
    #[serde(default)]
    bodies: Option<Vec<String>>,
}

/// Read the profile file: `$URANIA_PROFILE` if set, otherwise the first of
/// the common relative `configs/urania.toml` paths that exists.
pub fn read_profile_toml_text() -> anyhow::Result<String> {
    if let Ok(path) = env::var(PROFILE_ENV) {
        let path = PathBuf::from(path);
        return fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {} ({})", path.display(), PROFILE_ENV));
    }
    for p in &SEARCH_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    bail!("Could not load urania.toml from {:?}", SEARCH_PATHS);
}

fn parse_root(text: &str) -> anyhow::Result<RootConfigToml> {
    toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))
}

fn parse_body(field: &str, id: &str) -> anyhow::Result<Body> {
    id.parse::<Body>()
        .with_context(|| format!("Invalid body for {field}"))
}

fn aspect_kind(section: &str, id: &str) -> anyhow::Result<AspectKind> {
    match AspectKind::from_id(id) {
        Some(kind) => Ok(kind),
        None => bail!("Unknown aspect '{id}' in [{section}]"),
    }
}

fn ayanamsa_from(profile: &ProfileToml) -> anyhow::Result<Option<Ayanamsa>> {
    match (profile.ayanamsa.as_deref(), profile.ayanamsa_deg) {
        (None, None) => Ok(None),
        (None, Some(degrees)) | (Some("fixed"), Some(degrees)) => Ok(Some(Ayanamsa::Fixed { degrees })),
        (Some("fixed"), None) => bail!("profile.ayanamsa = \"fixed\" needs profile.ayanamsa_deg"),
        (Some("lahiri"), None) => Ok(Some(Ayanamsa::lahiri())),
        (Some("lahiri"), Some(_)) => bail!("profile.ayanamsa_deg cannot be combined with \"lahiri\""),
        (Some(other), _) => bail!("Unknown ayanamsa '{other}' (expected \"fixed\" or \"lahiri\")"),
    }
}

/// Map profile TOML text onto an [`AnalysisProfile`], starting from the
/// defaults, and validate the result.
pub fn parse_profile(text: &str) -> anyhow::Result<AnalysisProfile> {
    let root = parse_root(text)?;
    let cfg = &root.profile;
    let mut profile = AnalysisProfile::default();

    if let Some(ayanamsa) = ayanamsa_from(cfg)? {
        profile.ayanamsa = ayanamsa;
    }
    if let Some(obliquity) = cfg.obliquity_deg {
        profile.obliquity_deg = obliquity;
    }
    if let Some(anchor) = cfg.house_anchor {
        profile.house_anchor = anchor;
    }
    if let Some(preset) = &cfg.aspect_preset {
        profile.aspects = AspectTable::preset(preset).context("Invalid profile.aspect_preset")?;
    }
    if let Some(window) = cfg.symmetry_window_deg {
        profile.symmetry_window_deg = window;
    }
    if let Some(id) = &cfg.reference_body {
        profile.reference_body = parse_body("profile.reference_body", id)?;
    }
    if let Some(id) = &cfg.focus_body {
        profile.focus_body = parse_body("profile.focus_body", id)?;
    }
    if let Some(scale) = cfg.velocity_scale {
        profile.velocity_scale = scale;
    }
    if let Some(scale) = cfg.degree_scale {
        profile.degree_scale = scale;
    }
    if let Some(threshold) = cfg.resonance_threshold {
        profile.resonance_threshold = threshold;
    }

    let mut aspects = profile.aspects.clone();
    for (id, orb) in &root.orbs {
        let kind = aspect_kind("orbs", id)?;
        if aspects.get(kind).is_none() {
            log::warn!("[orbs] sets {} which the aspect table does not include", kind);
        }
        aspects = aspects.with_orb(kind, *orb);
    }
    for (id, weight) in &root.weights {
        let kind = aspect_kind("weights", id)?;
        if aspects.get(kind).is_none() {
            log::warn!("[weights] sets {} which the aspect table does not include", kind);
        }
        aspects = aspects.with_weight(kind, *weight);
    }
    profile.aspects = aspects;

    for (id, weight) in &root.importance {
        let body = parse_body("[importance]", id)?;
        profile.importance.insert(body, *weight);
    }
    for (id, motion) in &root.mean_motion {
        let body = parse_body("[mean_motion]", id)?;
        profile.mean_motion.insert(body, *motion);
    }

    let elements = &root.element_modifiers;
    let modifiers = &mut profile.element_modifiers;
    for (slot, value) in [
        (&mut modifiers.fire, elements.fire),
        (&mut modifiers.earth, elements.earth),
        (&mut modifiers.air, elements.air),
        (&mut modifiers.water, elements.water),
    ] {
        if let Some(value) = value {
            *slot = value;
        }
    }

    let retro = &root.retrograde;
    let weights = &mut profile.retrograde;
    for (slot, value) in [
        (&mut weights.base, retro.base),
        (&mut weights.speed, retro.speed),
        (&mut weights.debilitated, retro.debilitated),
        (&mut weights.exalted, retro.exalted),
    ] {
        if let Some(value) = value {
            *slot = value;
        }
    }

    profile.validate().context("Invalid analysis profile in urania.toml")?;
    Ok(profile)
}

/// Load and validate the analysis profile.
pub fn load_profile() -> anyhow::Result<AnalysisProfile> {
    let text = read_profile_toml_text()?;
    parse_profile(&text)
}

pub fn parse_observer(text: &str) -> anyhow::Result<GeoLocation> {
    let root = parse_root(text)?;
    let observer = root
        .observer
        .ok_or_else(|| anyhow::anyhow!("Missing [observer] config in urania.toml (needs lat and lon)"))?;
    GeoLocation::new(observer.lat, observer.lon).context("Invalid [observer] location")
}

/// The default observer from `[observer]`.
pub fn load_observer() -> anyhow::Result<GeoLocation> {
    let text = read_profile_toml_text()?;
    parse_observer(&text)
}

/// Body list from `bodies`; every supported body when the key is absent.
pub fn parse_bodies(text: &str) -> anyhow::Result<BodySet> {
    let root = parse_root(text)?;
    match root.bodies {
        Some(ids) => BodySet::parse(ids.as_slice()).context("Invalid bodies list in urania.toml"),
        None => Ok(BodySet::all()),
    }
}

pub fn load_bodies() -> anyhow::Result<BodySet> {
    let text = read_profile_toml_text()?;
    parse_bodies(&text)
}
