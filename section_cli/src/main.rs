//! # Hullform CLI
//!
//! Builds the half midship section of a small vessel, prints a per-panel
//! summary and the section properties, then the same results as JSON.
//!
//! ```text
//! section_cli           # table + JSON
//! section_cli --json    # JSON only
//! ```

use std::collections::BTreeMap;

use nalgebra::Vector2;
use serde::Serialize;

use section_core::prelude::*;

/// Offset points of the half section (mm), keel at the origin
fn offsets() -> BTreeMap<char, Vec2> {
    [
        ('a', [0.0, 8750.0]),
        ('b', [-6470.0, 8750.0]),
        ('c', [0.0, 6000.0]),
        ('d', [-7000.0, 6000.0]),
        ('e', [-3284.0, 3250.0]),
        ('f', [-6648.0, 3250.0]),
        ('g', [-6144.19, 2382.54]),
        ('h', [-5697.53, 1769.34]),
        ('i', [-4876.26, 1211.99]),
        ('j', [-3000.0, 1250.0]),
        ('k', [-2000.0, 1250.0]),
        ('l', [-2000.0, 1005.28]),
        ('m', [-1000.0, 1005.28]),
        ('n', [-1000.0, 1250.0]),
        ('o', [0.0, 1250.0]),
        ('p', [-400.0, 0.0]),
        ('q', [0.0, 0.0]),
        ('r', [-3000.0, 704.5]),
        ('s', [-2000.0, 434.2]),
        ('t', [-1000.0, 162.6]),
    ]
    .into_iter()
    .map(|(key, [y, z])| (key, Vector2::new(y, z)))
    .collect()
}

/// Plate strakes: (from, to, thickness, name, kind)
const STRAKES: [(char, char, f64, &str, PanelKind); 17] = [
    ('a', 'b', 10.0, "deck1", PanelKind::Deck),
    ('c', 'd', 10.0, "deck2", PanelKind::Deck),
    ('e', 'f', 8.0, "deck3", PanelKind::Deck),
    ('b', 'd', 10.0, "upper side shell", PanelKind::SideShell),
    ('d', 'f', 8.0, "mid side shell", PanelKind::SideShell),
    ('f', 'g', 9.0, "upper bilge", PanelKind::Bilge),
    ('g', 'h', 9.0, "mid bilge", PanelKind::Bilge),
    ('h', 'i', 9.0, "lower bilge", PanelKind::Bilge),
    ('i', 'p', 10.0, "bottom", PanelKind::Bottom),
    ('p', 'q', 25.0, "keel plate", PanelKind::Bottom),
    ('j', 'k', 20.0, "engine seating", PanelKind::Girder),
    ('l', 'm', 20.0, "lower engine seating", PanelKind::Girder),
    ('n', 'o', 20.0, "engine seating", PanelKind::Girder),
    ('j', 'r', 20.0, "side girder 1", PanelKind::Girder),
    ('k', 's', 20.0, "side girder 2", PanelKind::Girder),
    ('n', 't', 20.0, "side girder 3", PanelKind::Girder),
    ('o', 'q', 13.0, "centre girder", PanelKind::Girder),
];

fn build_section() -> SectionResult<TransverseSection> {
    let steel = Material::steel_a131();
    let points = offsets();
    let point = |key: char| {
        points
            .get(&key)
            .copied()
            .ok_or_else(|| SectionError::not_found("offset point", key))
    };

    let mut section = TransverseSection::new().with_name("midship");
    for (index, (from, to, thickness, name, kind)) in STRAKES.iter().enumerate() {
        let mut panel = StiffenedPanel::new().with_name(*name).with_kind(*kind);
        panel.set_plating(FlatPlate::from_endpoints(point(*from)?, point(*to)?, *thickness, steel.clone())?);
        section.add_panel(panel, Some(PanelId(index as u32)))?;
    }

    let hp80x6 = Stiffener::bulb(80.0, 6.0, steel.clone())?;
    let hp100x6 = Stiffener::bulb(100.0, 6.0, steel.clone())?;
    let hp120x7 = Stiffener::bulb(120.0, 7.0, steel.clone())?;
    let hp140x7 = Stiffener::bulb(140.0, 7.0, steel.clone())?;
    let hp160x7 = Stiffener::bulb(160.0, 7.0, steel.clone())?;
    let l450 = Stiffener::angle_bar(450.0, 8.0, 80.0, 8.0, steel.clone())?;
    let t450 = Stiffener::tee(450.0, 8.0, 150.0, 12.0, steel.clone())?;
    let t350 = Stiffener::tee(350.0, 10.0, 150.0, 15.0, steel)?;
    let up = Degrees(90.0);
    let down = Degrees(270.0);

    section.edit_panel(PanelId(0), |deck| {
        deck.add_stiffener(500.0, up, l450, None)?;
        deck.add_stiffener(2000.0, up, t450.clone(), None)?;
        deck.add_stiffeners_group(1000.0, up, 500.0, &hp80x6, 2)?;
        deck.add_stiffeners_group(2500.0, up, 500.0, &hp80x6, 8)
    })?;
    section.edit_panel(PanelId(1), |deck| {
        deck.add_stiffener(2000.0, up, t450, None)?;
        deck.add_stiffeners_group(500.0, up, 500.0, &hp80x6, 3)?;
        deck.add_stiffeners_group(2500.0, up, 500.0, &hp80x6, 9)
    })?;
    section.edit_panel(PanelId(2), |deck| {
        deck.add_stiffener(1000.0, up, t350, None)?;
        deck.add_stiffeners_group(0.0, up, 250.0, &hp80x6, 2)?;
        deck.add_stiffeners_group(1500.0, up, 500.0, &hp80x6, 4)
    })?;
    section.edit_panel(PanelId(3), |shell| shell.add_stiffeners_group(500.0, up, 500.0, &hp80x6, 5))?;
    section.edit_panel(PanelId(4), |shell| shell.add_stiffeners_group(500.0, up, 500.0, &hp120x7, 5))?;
    section.edit_panel(PanelId(5), |bilge| bilge.add_stiffeners_group(500.0, up, 500.0, &hp140x7, 2))?;
    section.edit_panel(PanelId(6), |bilge| bilge.add_stiffeners_group(760.0 / 3.0, up, 500.0, &hp140x7, 2))?;
    section.edit_panel(PanelId(7), |bilge| bilge.add_stiffeners_group(450.0, up, 500.0, &hp140x7, 2))?;
    section.edit_panel(PanelId(8), |bottom| {
        bottom.add_stiffeners_group(500.0, up, 500.0, &hp160x7, 3)?;
        bottom.add_stiffeners_group(2500.0, up, 1000.0, &hp100x6, 3)?;
        // bottom longitudinals stand vertical regardless of the deadrise
        bottom.set_stiffeners_angle(up);
        Ok(())
    })?;
    for seating in [10, 11, 12] {
        section.edit_panel(PanelId(seating), |panel| panel.add_stiffeners_group(500.0, down, 500.0, &hp120x7, 1))?;
    }

    Ok(section)
}

#[derive(Serialize)]
struct PanelSummary<'a> {
    id: PanelId,
    name: Option<&'a str>,
    kind: Option<PanelKind>,
    stiffeners: usize,
    properties: SectionProperties,
}

#[derive(Serialize)]
struct Report<'a> {
    section: Option<&'a str>,
    panels: Vec<PanelSummary<'a>>,
    properties: SectionProperties,
    moduli: SectionModuli,
}

fn build_report(section: &TransverseSection) -> SectionResult<Report<'_>> {
    let panels = section
        .panels()
        .map(|(id, panel)| {
            Ok(PanelSummary {
                id,
                name: panel.name(),
                kind: panel.kind(),
                stiffeners: panel.num_stiffeners(),
                properties: panel.section_properties()?,
            })
        })
        .collect::<SectionResult<Vec<_>>>()?;

    Ok(Report {
        section: section.name(),
        panels,
        properties: section.section_properties()?,
        moduli: section.section_moduli()?,
    })
}

fn print_table(report: &Report<'_>) {
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  TRANSVERSE SECTION: {}", report.section.unwrap_or("unnamed"));
    println!("═══════════════════════════════════════════════════════════════════════");
    println!();
    println!("{:>3}  {:<22} {:<11} {:>5} {:>11} {:>10} {:>10}", "id", "panel", "kind", "stf", "A (mm²)", "y (mm)", "z (mm)");
    for p in &report.panels {
        println!(
            "{:>3}  {:<22} {:<11} {:>5} {:>11.0} {:>10.1} {:>10.1}",
            p.id,
            p.name.unwrap_or("-"),
            p.kind.map(|k| k.display_name()).unwrap_or("-"),
            p.stiffeners,
            p.properties.area,
            p.properties.centroid[0],
            p.properties.centroid[1],
        );
    }
    println!();

    let props = &report.properties;
    println!("Section properties:");
    println!("  A    = {:.0} mm²", props.area);
    println!("  y_c  = {:.1} mm", props.centroid[0]);
    println!("  z_c  = {:.1} mm", props.centroid[1]);
    println!("  Iy   = {:.4e} mm⁴", props.iy);
    println!("  Iz   = {:.4e} mm⁴", props.iz);
    println!("  Iyz  = {:.4e} mm⁴", props.iyz);
    println!();

    let moduli = &report.moduli;
    println!("Hull girder (vertical bending):");
    println!("  Neutral axis    = {:.1} mm above baseline", moduli.neutral_axis);
    println!("  Z_deck          = {:.4e} mm³ (c = {:.1} mm)", moduli.z_top, moduli.distance_to_top);
    println!("  Z_keel          = {:.4e} mm³ (c = {:.1} mm)", moduli.z_bottom, moduli.distance_to_bottom);
    println!("  Z_min           = {:.4e} mm³", moduli.minimum());
    println!();
}

fn main() {
    let json_only = std::env::args().skip(1).any(|arg| arg == "--json");

    let section = match build_section() {
        Ok(section) => section,
        Err(e) => {
            eprintln!("Failed to build section: {} [{}]", e, e.error_code());
            std::process::exit(1);
        }
    };

    match build_report(&section) {
        Ok(report) => {
            if !json_only {
                println!("Hullform - Built-up Section Properties");
                println!("======================================");
                println!();
                print!("{section}");
                println!();
                print_table(&report);
                println!("JSON Output:");
            }
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("JSON serialization failed: {}", e),
            }
        }
        Err(e) => {
            eprintln!("Error: {} [{}]", e, e.error_code());
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
