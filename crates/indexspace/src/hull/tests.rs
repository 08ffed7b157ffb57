use super::*;
use crate::api::{compute_with, Domain};
use crate::constraint::ConstraintSet;
use crate::rand::{draw_cut_box, CutBoxCfg, ReplayToken};
use crate::special;
use nalgebra::dvector;
use proptest::prelude::*;

fn vertices_of(dom: &Domain, cfg: HullCfg) -> VertexSet {
    generate_vertices(&dom.constraints, &dom.rhs, &cfg, &mut NoopObserver).unwrap()
}

/// Every consecutive pair, wrap-around included, shares `d-1` constraints.
fn assert_chains_close(vs: &VertexSet, polys: &Polygons) {
    let d = vs.dimensionality;
    for p in polys.values() {
        assert!(p.is_closed_chain(), "constraint {} broke: {:?}", p.constraint, p.breaks);
        let n = p.ordered.len();
        for i in 0..n {
            let a = &vs.vertices[p.ordered[i]].constraints;
            let b = &vs.vertices[p.ordered[(i + 1) % n]].constraints;
            assert_eq!(shared_count(a, b), d - 1, "constraint {} slot {}", p.constraint, i);
        }
    }
}

fn cut_cube() -> Domain {
    // cube [1,5]^3 with the corner (5,5,5) cut by i + j + k <= 12
    let mut dom = special::cube(5.0).unwrap();
    dom.constraints.add(&dvector![1.0, 1.0, 1.0]).unwrap();
    dom.rhs = dvector![5.0, 5.0, 5.0, -1.0, -1.0, -1.0, 12.0];
    dom
}

#[test]
fn cube_has_eight_corners() {
    let dom = special::cube(5.0).unwrap();
    let mut rec = RecordingObserver::default();
    let vs = generate_vertices(&dom.constraints, &dom.rhs, &HullCfg::default(), &mut rec).unwrap();
    assert_eq!(vs.len(), 8);
    // C(6,3) = 20 combinations, 12 of them pick two parallel planes
    assert_eq!(rec.count_rank_deficient(), 12);
    for v in &vs.vertices {
        assert_eq!(v.constraints.len(), 3);
        assert!(v.point.iter().all(|&x| x == 1.0 || x == 5.0), "{:?}", v.point);
    }
    for i in [1.0, 5.0] {
        for j in [1.0, 5.0] {
            for k in [1.0, 5.0] {
                assert!(vs.find(&dvector![i, j, k], 1e-9).is_some());
            }
        }
    }
    let low = vs.find(&dvector![1.0, 1.0, 1.0], 1e-9).unwrap();
    assert_eq!(low.constraints, vec![3, 4, 5]);
    let high = vs.find(&dvector![5.0, 5.0, 5.0], 1e-9).unwrap();
    assert_eq!(high.constraints, vec![0, 1, 2]);
    // each face touches four corners
    for c in 0..6 {
        assert_eq!(vs.incident(c).len(), 4);
    }
}

#[test]
fn exhaustive_cube_matches_filtered() {
    let dom = special::cube(5.0).unwrap();
    assert_eq!(vertices_of(&dom, HullCfg::exhaustive()).len(), 8);
}

#[test]
fn cube_face_is_closed_four_cycle() {
    let dom = special::cube(5.0).unwrap();
    let cfg = HullCfg::default();
    let vs = vertices_of(&dom, cfg);
    let polys = organize(&dom.constraints, &vs, &cfg, &mut NoopObserver).unwrap();
    assert_eq!(polys.len(), 6);
    assert_chains_close(&vs, &polys);

    let face = &polys[&0];
    assert_eq!(face.ordered.len(), 4);
    assert_eq!(face.polyline.len(), 5);
    assert_eq!(face.polyline.first(), face.polyline.last());
    let expected = [
        dvector![5.5, 5.0, 5.0],
        dvector![5.5, 5.0, 1.0],
        dvector![5.5, 1.0, 1.0],
        dvector![5.5, 1.0, 5.0],
        dvector![5.5, 5.0, 5.0],
    ];
    for (got, want) in face.polyline.iter().zip(expected.iter()) {
        assert!((got - want).norm() < 1e-12, "{:?} vs {:?}", got, want);
    }
    // offset never leaks back into the vertex records
    assert!(vs.vertices.iter().all(|v| v.point[0] <= 5.0 + 1e-12));
    // generation order is kept on the vertex set
    assert_eq!(vs.incident(0), &[0, 1, 2, 3]);
}

#[test]
fn cut_corner_is_dropped() {
    let dom = cut_cube();
    let mut rec = RecordingObserver::default();
    let vs = generate_vertices(&dom.constraints, &dom.rhs, &HullCfg::default(), &mut rec).unwrap();
    assert_eq!(vs.len(), 10);
    assert!(vs.find(&dvector![5.0, 5.0, 5.0], 1e-9).is_none());
    assert!(vs.find(&dvector![5.0, 5.0, 2.0], 1e-9).is_some());
    let infeasible = rec
        .events
        .iter()
        .filter(|e| matches!(e, HullEvent::Infeasible(_)))
        .count();
    assert_eq!(infeasible, 10);
    for v in &vs.vertices {
        assert!(dom.constraints.satisfies(&v.point, &dom.rhs, 1e-9).unwrap());
    }
    assert_eq!(vertices_of(&dom, HullCfg::exhaustive()).len(), 20);
}

#[test]
fn cut_cube_faces_chain() {
    let dom = cut_cube();
    let cfg = HullCfg::default();
    let vs = vertices_of(&dom, cfg);
    let polys = organize(&dom.constraints, &vs, &cfg, &mut NoopObserver).unwrap();
    assert_chains_close(&vs, &polys);
    assert_eq!(polys[&0].ordered.len(), 5);
    assert_eq!(polys[&6].ordered.len(), 3);
}

#[test]
fn prism_and_simplex_faces_chain() {
    let cfg = HullCfg::default();
    for dom in [
        special::lower_triangular(4.0).unwrap(),
        special::corner_simplex(3, 6.0).unwrap(),
    ] {
        let vs = vertices_of(&dom, cfg);
        let polys = organize(&dom.constraints, &vs, &cfg, &mut NoopObserver).unwrap();
        assert_chains_close(&vs, &polys);
    }
    let prism = special::lower_triangular(4.0).unwrap();
    let vs = vertices_of(&prism, cfg);
    assert_eq!(vs.len(), 6);
    assert_eq!(vs.incident(3).len(), 3);
    assert_eq!(vs.incident(2).len(), 4);
    assert_eq!(vertices_of(&special::corner_simplex(3, 6.0).unwrap(), cfg).len(), 4);
}

#[test]
fn tesseract_has_sixteen_vertices() {
    let dom = special::hyperbox(&[-1.0; 4], &[1.0; 4]).unwrap();
    let vs = vertices_of(&dom, HullCfg::default());
    assert_eq!(vs.len(), 16);
    assert!(vs.vertices.iter().all(|v| v.constraints.len() == 4));
}

#[test]
fn too_few_constraints_or_bad_rhs() {
    let cs = ConstraintSet::from_rows([dvector![1.0, 0.0, 0.0], dvector![0.0, 1.0, 0.0]]).unwrap();
    let vs = generate_vertices(&cs, &dvector![1.0, 1.0], &HullCfg::default(), &mut NoopObserver)
        .unwrap();
    assert!(vs.is_empty());
    assert!(generate_vertices(&cs, &dvector![1.0], &HullCfg::default(), &mut NoopObserver).is_err());
}

#[test]
fn large_extent_cut_boxes_keep_every_vertex() {
    let cfg = CutBoxCfg {
        extent: 1e8,
        cuts: 3,
        ..CutBoxCfg::default()
    };
    let hull = HullCfg::default();
    for index in 0..200 {
        let dom = draw_cut_box(cfg, ReplayToken { seed: 0, index }).unwrap();
        let mut rec = RecordingObserver::default();
        let vs = generate_vertices(&dom.constraints, &dom.rhs, &hull, &mut rec).unwrap();
        let polys = organize(&dom.constraints, &vs, &hull, &mut rec).unwrap();
        assert_eq!(rec.chain_breaks().count(), 0, "index {index}");
        assert_chains_close(&vs, &polys);
    }
}

fn hand_built(combos: &[&[usize]]) -> VertexSet {
    let mut vs = VertexSet {
        dimensionality: 3,
        ..VertexSet::default()
    };
    for (i, c) in combos.iter().enumerate() {
        vs.vertices.push(Vertex {
            point: dvector![i as f64, 0.0, 0.0],
            constraints: c.to_vec(),
        });
        for &k in c.iter() {
            vs.incidence.entry(k).or_default().push(i);
        }
    }
    vs
}

#[test]
fn ordering_reports_gap_and_closing_break() {
    // two disjoint edges on constraint 0: {0,1,*} and {0,4,*}
    let vs = hand_built(&[&[0, 1, 2], &[0, 4, 5], &[0, 1, 3], &[0, 4, 6]]);
    let mut list = vs.incident(0).to_vec();
    let gaps = order_incidence(&vs.vertices, &mut list, 3);
    assert_eq!(list, vec![0, 2, 1, 3]);
    assert_eq!(gaps, vec![1]);

    let mut cs = ConstraintSet::new();
    for _ in 0..7 {
        cs.add(&dvector![1.0, 0.0, 0.0]).unwrap();
    }
    let mut rec = RecordingObserver::default();
    let polys = organize(&cs, &vs, &HullCfg::default(), &mut rec).unwrap();
    let face = &polys[&0];
    assert_eq!(
        face.breaks,
        vec![
            ChainBreak {
                constraint: 0,
                position: 1,
                closing: false
            },
            ChainBreak {
                constraint: 0,
                position: 3,
                closing: true
            },
        ]
    );
    assert!(rec.chain_breaks().any(|b| b.constraint == 0 && b.closing));
    // the polyline is still complete and closed
    assert_eq!(face.polyline.len(), 5);
}

#[test]
fn isolated_combinations_never_chain() {
    let vs = hand_built(&[&[0, 1, 2], &[0, 3, 4], &[0, 5, 6]]);
    let mut list = vs.incident(0).to_vec();
    assert_eq!(order_incidence(&vs.vertices, &mut list, 3), vec![0, 1]);
    assert_eq!(list, vec![0, 1, 2]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn random_cut_boxes_chain(seed in any::<u64>(), index in 0u64..1024, cuts in 0usize..4) {
        let cfg = CutBoxCfg { cuts, ..CutBoxCfg::default() };
        let dom = draw_cut_box(cfg, ReplayToken { seed, index }).unwrap();
        let hull = HullCfg::default();
        let analysis = compute_with(&dom, &hull, &mut NoopObserver).unwrap();
        prop_assert!(analysis.vertices.len() >= 4);
        for v in &analysis.vertices.vertices {
            prop_assert!(dom.constraints.satisfies(&v.point, &dom.rhs, 1e-7).unwrap());
        }
        let d = analysis.vertices.dimensionality;
        for p in analysis.polygons.values() {
            prop_assert!(p.breaks.is_empty());
            let n = p.ordered.len();
            for i in 0..n {
                let a = &analysis.vertices.vertices[p.ordered[i]].constraints;
                let b = &analysis.vertices.vertices[p.ordered[(i + 1) % n]].constraints;
                prop_assert_eq!(shared_count(a, b), d - 1);
            }
        }
    }
}
