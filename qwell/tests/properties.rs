#![allow(non_snake_case)]

use std::f64::consts::PI;
use std::path::PathBuf;
use approx::assert_relative_eq;
use ndarray as nd;
use qwell::{
    N_BANDS,
    eigen,
    error::{ PlotError, QwError },
    hamiltonian::Heterostructure,
    material::Material,
    plot::{ self, PlotStyle },
    sweep::{ Dispersion, Sweep, WidthScan },
    units::UnitSystem,
};

fn reference() -> (Heterostructure, UnitSystem) {
    let uu = UnitSystem::standard();
    let hs = Heterostructure::reference(&uu).unwrap();
    (hs, uu)
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("qwell-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn small_dispersion() -> Dispersion {
    let uu = UnitSystem::standard();
    let hs = Heterostructure::reference(&uu).unwrap();
    Sweep::new(0.0, 0.05, 5).unwrap().run(&hs, &uu).unwrap()
}

#[test]
fn hamiltonian_is_symmetric() {
    let uu = UnitSystem::standard();
    let m_e = uu.m_e();
    for (barrier_sites, well_sites) in [(1, 0), (5, 1), (5, 2), (10, 7), (100, 23)] {
        let hs = Heterostructure::new(
            3.0,
            barrier_sites,
            well_sites,
            Material::algaas(m_e),
            Material::gallium_arsenide(m_e),
        ).unwrap();
        for k in Sweep::default().wavevectors().iter().copied() {
            let H = hs.hamiltonian(&uu, k).to_dense();
            assert!(
                nd::Zip::indexed(&H)
                    .all(|(i, j), hij| *hij == H[[j, i]].conj())
            );
        }
    }
}

#[test]
fn uniform_rod_matches_toeplitz_spectrum() {
    let uu = UnitSystem::standard();
    let a = 3.0;
    let mat = Material::new(0.07 * uu.m_e(), 0.2).unwrap();
    let hs = Heterostructure::new(a, 10, 15, mat, mat).unwrap();
    let n = hs.site_count();
    let t = uu.hbar().powi(2) / (2.0 * mat.mass * a * a);

    let H = hs.hamiltonian(&uu, 0.0).to_real(0.0).unwrap();
    let evals = eigen::solve(&H).unwrap();
    assert_eq!(evals.len(), n);
    for (j, ev) in (1..=n).zip(evals.iter()) {
        let expected
            = mat.offset + 2.0 * t
            - 2.0 * t * (PI * j as f64 / (n as f64 + 1.0)).cos();
        assert_relative_eq!(*ev, expected, max_relative = 1e-9);
    }
}

#[test]
fn eigenvalues_ascending() {
    let n = 40;
    let H: nd::Array2<f64>
        = nd::Array2::from_shape_fn((n, n), |(i, j)| {
            ((i * j) as f64).sin() + ((i + j) as f64 / 3.0).cos()
        });
    let evals = eigen::solve(&H).unwrap();
    assert!(evals.windows(2).into_iter().all(|w| w[0] <= w[1]));

    let (hs, uu) = reference();
    let evals = eigen::solve(&hs.hamiltonian(&uu, 0.03).to_real(0.0).unwrap())
        .unwrap();
    assert!(evals.windows(2).into_iter().all(|w| w[0] <= w[1]));
}

#[test]
fn sweep_is_deterministic() {
    let (hs, uu) = reference();
    let sweep = Sweep::new(0.0, 0.05, 20).unwrap();
    let first = sweep.run(&hs, &uu).unwrap();
    let second = sweep.run(&hs, &uu).unwrap();
    assert_eq!(first, second);
}

#[test]
fn wider_well_lowers_ground_state() {
    let (hs, uu) = reference();
    let ground: Vec<f64>
        = [4, 8, 12, 16, 20, 24].into_iter()
        .map(|w| {
            let hs = hs.with_well_sites(w).unwrap();
            eigen::lowest_model(&hs.hamiltonian(&uu, 0.0), 1).unwrap()[0]
        })
        .collect();
    assert!(ground.windows(2).all(|w| w[1] < w[0]));

    let disp = WidthScan::linspace(0.0, 12.0, 72.0, 6).unwrap()
        .run(&hs, &uu).unwrap();
    assert!(disp.band(0).windows(2).into_iter().all(|w| w[1] < w[0]));
}

#[test]
fn reference_scenario() {
    let (hs, uu) = reference();
    assert_eq!(hs.well_sites(), 23);
    assert_eq!(hs.site_count(), 223);
    let disp = Sweep::default().run(&hs, &uu).unwrap();
    assert_eq!(disp.energies().dim(), (N_BANDS, 100));
    assert_eq!(disp.x()[0], 0.0);
    assert_relative_eq!(disp.x()[99], 0.05, max_relative = 1e-12);

    let e0 = disp.band(0)[0];
    let e1 = disp.band(1)[0];
    assert!(0.0 < e0 && e0 < 1.25);
    assert!(0.0 < e1 && e1 < 1.25);
    assert!(e0 < e1);
    // both levels are confined below the barrier offset
    assert!(e1 < hs.barrier().offset);
    assert!(disp.band(0).iter().zip(disp.band(1)).all(|(a, b)| a < b));
}

#[test]
fn parallel_sweep_agrees() {
    let (hs, uu) = reference();
    let sweep = Sweep::new(0.0, 0.05, 12).unwrap();
    let serial = sweep.run(&hs, &uu).unwrap();
    let parallel = sweep.with_threads(4).run(&hs, &uu).unwrap();
    assert!(
        serial.energies().iter().zip(parallel.energies())
            .all(|(s, p)| (s - p).abs() < 1e-12)
    );
}

#[test]
fn render_creates_directories() {
    let dir = scratch_dir("render");
    let path = dir.join("nested").join("EigenValues.png");
    let res = plot::render(&small_dispersion(), &PlotStyle::default(), &path);
    assert!(dir.join("nested").is_dir());
    // drawing text needs a system font; when one is available the image must
    // exist
    if res.is_ok() {
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    } else {
        assert!(matches!(res, Err(PlotError::Draw { .. })));
    }
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn render_writes_unannotated_image() {
    let dir = scratch_dir("bare");
    let path = dir.join("nested").join("EigenValues.png");
    let style = PlotStyle {
        x_label: String::new(),
        y_label: String::new(),
        annotate: false,
        ..PlotStyle::default()
    };
    plot::render(&small_dispersion(), &style, &path).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn render_errors() {
    let dir = scratch_dir("errors");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let disp = small_dispersion();

    let res = plot::render(
        &disp, &PlotStyle::default(), blocker.join("sub").join("out.png"));
    assert!(matches!(res, Err(PlotError::CreateDir { .. })));
    let err: QwError = res.unwrap_err().into();
    assert_eq!(err.category(), "io");

    let style = PlotStyle::new("Width", "Energy (eV)", (0.4, 0.0));
    let res = plot::render(&disp, &style, dir.join("out.png"));
    assert!(matches!(res, Err(PlotError::Config(_))));
    let _ = std::fs::remove_dir_all(&dir);
}
