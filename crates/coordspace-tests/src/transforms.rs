//! Transform registry and builtin conversion tests

#[cfg(test)]
mod tests {
    use crate::utils::*;
    use coordspace_core::builtin::{Cartesian1D, Cartesian2D, LogPolar, Polar, Redshift};
    use coordspace_core::{
        AnyCoordinate, Array, CoordError, RepKind, Representation, TransformRegistry,
    };
    use coordspace_cpu::CpuBackend;

    fn registry() -> TransformRegistry<CpuBackend> {
        TransformRegistry::with_builtin()
    }

    fn cart2(x: Vec<f64>, y: Vec<f64>) -> Cartesian2D<CpuBackend> {
        Cartesian2D::new(arr(x), arr(y)).unwrap()
    }

    // ============ Cartesian <-> Polar ============

    #[test]
    fn test_cartesian_to_polar_exact() {
        let c = cart2(vec![3.0], vec![4.0]);
        let p: Polar<CpuBackend> = registry().convert(&c).unwrap();
        assert_eq!(p.rho().as_f64_slice(), vec![5.0]);
        assert_eq!(p.phi().as_f64_slice(), vec![4.0_f64.atan2(3.0)]);
    }

    #[test]
    fn test_cartesian_polar_round_trip() {
        let reg = registry();
        let c = cart2(vec![3.0, -1.0, 0.5], vec![4.0, 2.0, -0.25]);
        let p: Polar<CpuBackend> = reg.convert(&c).unwrap();
        let back: Cartesian2D<CpuBackend> = reg.convert(&p).unwrap();
        assert!(arrays_approx_eq(back.x(), c.x(), DEFAULT_TOL));
        assert!(arrays_approx_eq(back.y(), c.y(), DEFAULT_TOL));
    }

    // ============ Cartesian <-> LogPolar ============

    #[test]
    fn test_cartesian_to_log_polar_unit() {
        let c = cart2(vec![1.0], vec![0.0]);
        let lp: LogPolar<CpuBackend> = registry().convert(&c).unwrap();
        assert_eq!(lp.rho().as_f64_slice(), vec![0.0]);
        assert_eq!(lp.phi().as_f64_slice(), vec![0.0]);
    }

    #[test]
    fn test_log_polar_to_cartesian_unit() {
        let lp = LogPolar::<CpuBackend>::new(arr(vec![0.0]), arr(vec![0.0])).unwrap();
        let c: Cartesian2D<CpuBackend> = registry().convert(&lp).unwrap();
        assert!(approx_eq(c.x().as_f64_slice()[0], 1.0, DEFAULT_TOL));
        assert!(approx_eq(c.y().as_f64_slice()[0], 0.0, DEFAULT_TOL));
    }

    #[test]
    fn test_log_polar_round_trip() {
        let reg = registry();
        let c = cart2(vec![2.0, 0.3], vec![1.0, -0.7]);
        let lp: LogPolar<CpuBackend> = reg.convert(&c).unwrap();
        let back: Cartesian2D<CpuBackend> = reg.convert(&lp).unwrap();
        assert!(arrays_approx_eq(back.x(), c.x(), DEFAULT_TOL));
        assert!(arrays_approx_eq(back.y(), c.y(), DEFAULT_TOL));
    }

    // ============ Polar <-> LogPolar ============

    #[test]
    fn test_polar_log_polar_inverse_pair() {
        let reg = registry();
        let p = Polar::<CpuBackend>::new(arr(vec![1.0, 2.0, 0.5]), arr(vec![0.3, -0.3, 1.2]))
            .unwrap();
        let lp: LogPolar<CpuBackend> = reg.convert(&p).unwrap();
        assert!(approx_eq(lp.rho().as_f64_slice()[1], 2.0_f64.ln(), DEFAULT_TOL));
        let back: Polar<CpuBackend> = reg.convert(&lp).unwrap();
        assert!(arrays_approx_eq(back.rho(), p.rho(), DEFAULT_TOL));
        assert!(arrays_approx_eq(back.phi(), p.phi(), DEFAULT_TOL));
    }

    // ============ registry behavior ============

    #[test]
    fn test_miss_names_both_kinds_and_does_not_mutate() {
        let reg = registry();
        let before = reg.len();
        let c = Cartesian1D::<CpuBackend>::new(arr(vec![1.0])).unwrap();
        let err = reg
            .convert::<_, Cartesian2D<CpuBackend>>(&c)
            .unwrap_err();
        match &err {
            CoordError::UnsupportedTransform { from, to } => {
                assert_eq!(*from, RepKind::Cartesian1D);
                assert_eq!(*to, RepKind::Cartesian2D);
            }
            other => panic!("expected UnsupportedTransform, got {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("Cartesian1D") && msg.contains("Cartesian2D"));
        assert_eq!(reg.len(), before);
        assert!(!reg.contains(RepKind::Cartesian1D, RepKind::Cartesian2D));
    }

    #[test]
    fn test_identity_requires_explicit_registration() {
        let empty = TransformRegistry::<CpuBackend>::new();
        let c = cart2(vec![1.0], vec![2.0]);
        let result = c.represent_as(RepKind::Cartesian2D, &empty);
        assert!(matches!(
            result,
            Err(CoordError::UnsupportedTransform { .. })
        ));
    }

    #[test]
    fn test_builtin_identity_is_registered() {
        let reg = registry();
        let c = cart2(vec![1.0, 2.0], vec![3.0, 4.0]);
        let same: Cartesian2D<CpuBackend> = reg.convert(&c).unwrap();
        assert!(arrays_approx_eq(same.x(), c.x(), DEFAULT_TOL));

        let z = Redshift::<CpuBackend>::new(arr(vec![0.5])).unwrap();
        let same: Redshift<CpuBackend> = reg.convert(&z).unwrap();
        assert_eq!(same.redshift().as_f64_slice(), vec![0.5]);
    }

    #[test]
    fn test_register_overwrites_exact_pair() {
        let reg = registry();
        reg.register(RepKind::Cartesian2D, RepKind::Polar, |_any| {
            Ok(Polar::new(scalar(0.0), scalar(0.0))?.into())
        });
        let c = cart2(vec![3.0], vec![4.0]);
        let p: Polar<CpuBackend> = reg.convert(&c).unwrap();
        assert_eq!(p.rho().as_f64_slice(), vec![0.0]);
    }

    #[test]
    fn test_wrong_output_kind_surfaces_in_typed_conversion() {
        let reg = TransformRegistry::<CpuBackend>::new();
        // a registration that lies about its output kind
        reg.register(RepKind::Redshift, RepKind::Polar, |any| Ok(any.clone()));
        let z = Redshift::<CpuBackend>::new(arr(vec![1.0])).unwrap();
        let result = reg.convert::<_, Polar<CpuBackend>>(&z);
        assert!(matches!(
            result,
            Err(CoordError::KindMismatch {
                expected: RepKind::Polar,
                got: RepKind::Redshift
            })
        ));
    }

    #[test]
    fn test_no_transitive_closure() {
        let reg = TransformRegistry::<CpuBackend>::new();
        reg.register(RepKind::Cartesian2D, RepKind::Polar, |any| {
            TransformRegistry::<CpuBackend>::with_builtin().lookup_and_apply(any, RepKind::Polar)
        });
        reg.register(RepKind::Polar, RepKind::LogPolar, |any| {
            TransformRegistry::<CpuBackend>::with_builtin()
                .lookup_and_apply(any, RepKind::LogPolar)
        });
        let c = cart2(vec![1.0], vec![0.0]);

        // A -> C is not derived from A -> B and B -> C
        let direct = c.represent_as(RepKind::LogPolar, &reg);
        assert!(matches!(
            direct,
            Err(CoordError::UnsupportedTransform { .. })
        ));

        // two explicit hops work
        let p = c.represent_as(RepKind::Polar, &reg).unwrap();
        let lp = p.represent_as(RepKind::LogPolar, &reg).unwrap();
        assert_eq!(lp.kind(), RepKind::LogPolar);
    }

    #[test]
    fn test_transforms_may_capture_auxiliary_coordinates() {
        use coordspace_core::MathOps;

        let reg = TransformRegistry::<CpuBackend>::new();
        // an auxiliary coordinate captured by the conversion, the way a
        // velocity transform would capture its reference position
        let origin = cart2(vec![10.0], vec![20.0]);
        reg.register(RepKind::Cartesian2D, RepKind::Cartesian2D, move |any| {
            let AnyCoordinate::Cartesian2D(c) = any else {
                return Err(CoordError::KindMismatch {
                    expected: RepKind::Cartesian2D,
                    got: any.kind(),
                });
            };
            let x = CpuBackend::add(c.x(), origin.x())?;
            let y = CpuBackend::add(c.y(), origin.y())?;
            Ok(Cartesian2D::new(x, y)?.into())
        });

        let c = cart2(vec![1.0], vec![2.0]);
        let shifted: Cartesian2D<CpuBackend> = reg.convert(&c).unwrap();
        assert_eq!(shifted.x().as_f64_slice(), vec![11.0]);
        assert_eq!(shifted.y().as_f64_slice(), vec![22.0]);
    }

    #[test]
    fn test_lookup_and_apply_on_any_coordinate() {
        let reg = registry();
        let any: AnyCoordinate<CpuBackend> = cart2(vec![0.0], vec![2.0]).into();
        let p = reg.lookup_and_apply(&any, RepKind::Polar).unwrap();
        assert_eq!(p.kind(), RepKind::Polar);
        let p: Polar<CpuBackend> = p.try_into().unwrap();
        assert_eq!(p.rho().as_f64_slice(), vec![2.0]);
    }
}
