mod tests {
    use approx::assert_abs_diff_eq;
    use xy_light_mixer::chromaticity::{duv, illuminant};
    use xy_light_mixer::profile::PrimarySource;
    use xy_light_mixer::{
        ConfigError, CwwwProfile, CwwwProfileConfig, ImpurityConfig, IntensityLimits,
        PrimaryConfig, RGB, RgbProfile, RgbProfileConfig, StandardGamut, Transfer, WhitePoint,
        WhiteProfile, WhiteProfileConfig, cct_to_xy,
    };

    #[test]
    fn test_standard_rgb_profile() {
        let profile = RgbProfile::new(&RgbProfileConfig::standard(StandardGamut::Srgb)).unwrap();
        assert_eq!(profile, RgbProfile::standard(StandardGamut::Srgb));
        assert_eq!(profile.standard_gamut(), Some(StandardGamut::Srgb));
        assert_eq!(profile.white_point(), illuminant::D65);
        assert_abs_diff_eq!(profile.gamma(), 1.0);
        assert_eq!(profile.transfer(), Transfer::Srgb);
        assert_abs_diff_eq!(profile.primaries()[0].xy.x(), 0.64);
        assert_abs_diff_eq!(profile.primaries()[2].xy.y(), 0.06);
    }

    #[test]
    fn test_standard_gamuts_keep_their_white() {
        let adobe = RgbProfile::standard(StandardGamut::AdobeRgbD55);
        assert_eq!(adobe.white_point(), illuminant::D55);

        let aces = RgbProfile::standard(StandardGamut::AcesAp0);
        assert_eq!(aces.white_point(), illuminant::ACES);
        assert_eq!(aces.transfer(), Transfer::Linear);
        assert_eq!(adobe.transfer(), Transfer::Power(2.2));
    }

    #[test]
    fn test_partial_standard_gamut() {
        let config = RgbProfileConfig::custom(
            PrimarySource::Standard(StandardGamut::Srgb),
            PrimarySource::Standard(StandardGamut::Srgb),
            PrimarySource::Xy { x: 0.15, y: 0.06 },
        );
        assert_eq!(RgbProfile::new(&config), Err(ConfigError::PartialStandardGamut));

        let mixed = RgbProfileConfig::custom(
            PrimarySource::Standard(StandardGamut::Srgb),
            PrimarySource::Standard(StandardGamut::Srgb),
            PrimarySource::Standard(StandardGamut::ProPhoto),
        );
        assert_eq!(RgbProfile::new(&mixed), Err(ConfigError::PartialStandardGamut));
    }

    #[test]
    fn test_wavelength_primaries() {
        let config = RgbProfileConfig::custom(
            PrimarySource::Wavelength(630.0),
            PrimarySource::Wavelength(530.0),
            PrimarySource::Wavelength(465.0),
        );
        let profile = RgbProfile::new(&config).unwrap();
        assert_eq!(profile.white_point(), illuminant::D65);
        assert!(profile.gamut().contains(illuminant::D65));
        assert_eq!(profile.standard_gamut(), None);
    }

    #[test]
    fn test_custom_primary_errors() {
        let degenerate = RgbProfileConfig::custom(
            PrimarySource::Xy { x: 0.1, y: 0.1 },
            PrimarySource::Xy { x: 0.2, y: 0.2 },
            PrimarySource::Xy { x: 0.3, y: 0.3 },
        );
        assert_eq!(RgbProfile::new(&degenerate), Err(ConfigError::DegenerateGamut));

        let out_of_box = RgbProfileConfig::custom(
            PrimarySource::Xy { x: 0.8, y: 0.1 },
            PrimarySource::Xy { x: 0.2, y: 0.7 },
            PrimarySource::Xy { x: 0.15, y: 0.06 },
        );
        assert_eq!(
            RgbProfile::new(&out_of_box),
            Err(ConfigError::XyOutOfRange { x: 0.8, y: 0.1 })
        );

        let bad_wavelength = RgbProfileConfig::custom(
            PrimarySource::Wavelength(900.0),
            PrimarySource::Wavelength(530.0),
            PrimarySource::Wavelength(465.0),
        );
        assert_eq!(
            RgbProfile::new(&bad_wavelength),
            Err(ConfigError::WavelengthOutOfRange(900.0))
        );
    }

    #[test]
    fn test_channel_config_errors() {
        let mut config = RgbProfileConfig::standard(StandardGamut::Srgb);
        config.gamma = Some(0.0);
        assert_eq!(RgbProfile::new(&config), Err(ConfigError::InvalidGamma(0.0)));

        let mut config = RgbProfileConfig::standard(StandardGamut::Srgb);
        config.green = config.green.with_intensity(1.5);
        assert_eq!(RgbProfile::new(&config), Err(ConfigError::IntensityOutOfRange(1.5)));

        let mut config = RgbProfileConfig::standard(StandardGamut::Srgb);
        config.blue = config.blue.with_limits(0.5, 0.2);
        assert_eq!(
            RgbProfile::new(&config),
            Err(ConfigError::InvertedIntensityRange { min: 0.5, max: 0.2 })
        );

        let mut config = RgbProfileConfig::standard(StandardGamut::Srgb);
        config.white_point = Some(WhitePoint::Cct(500.0));
        assert_eq!(
            RgbProfile::new(&config),
            Err(ConfigError::ColorTemperatureOutOfRange(500.0))
        );
    }

    #[test]
    fn test_per_channel_overrides() {
        let mut config = RgbProfileConfig::standard(StandardGamut::Srgb);
        config.gamma = Some(2.2);
        config.white_point = Some(WhitePoint::Cct(5000.0));
        config.red = PrimaryConfig::new(PrimarySource::Standard(StandardGamut::Srgb))
            .with_intensity(0.8)
            .with_gamma(1.8)
            .with_limits(0.05, 0.9);

        let profile = RgbProfile::new(&config).unwrap();
        let shapes = profile.channel_shapes();
        assert_abs_diff_eq!(shapes[0].gamma(), 1.8);
        assert_abs_diff_eq!(shapes[1].gamma(), 2.2);
        assert_abs_diff_eq!(shapes[0].min(), 0.05);
        assert_abs_diff_eq!(shapes[0].max(), 0.9);
        assert_abs_diff_eq!(profile.primaries()[0].intensity, 0.8);
        assert_eq!(profile.transfer(), Transfer::Power(2.2));
        assert_eq!(profile.white_point(), cct_to_xy(5000.0).unwrap());
    }

    #[test]
    fn test_adjust_saturation() {
        let profile = RgbProfile::default();
        let red = profile.gamut().red;
        assert_eq!(profile.adjust_saturation(red, 1.0), red);
        assert!(profile.adjust_saturation(red, 0.0).distance(profile.white_point()) < 1e-6);

        let half = profile.adjust_saturation(red, 0.5);
        assert_abs_diff_eq!(
            half.distance(red),
            half.distance(profile.white_point()),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_encoded_rgb_to_xy() {
        let profile = RgbProfile::default();
        assert_eq!(profile.encoded_rgb_to_xy(RGB::new(0.0, 0.0, 0.0)), None);

        let white = profile.encoded_rgb_to_xy(RGB::new(0.5, 0.5, 0.5)).unwrap();
        assert_abs_diff_eq!(white.x(), illuminant::D65.x(), epsilon = 1e-4);
        assert_abs_diff_eq!(white.y(), illuminant::D65.y(), epsilon = 1e-4);

        let red = profile.encoded_rgb_to_xy(RGB::new(1.0, 0.0, 0.0)).unwrap();
        assert_abs_diff_eq!(red.x(), 0.64, epsilon = 1e-4);
        assert_abs_diff_eq!(red.y(), 0.33, epsilon = 1e-4);
    }

    #[test]
    fn test_srgb_decode_is_piecewise() {
        let profile = RgbProfile::default();
        let orange = profile.encoded_rgb_to_xy(RGB::new(1.0, 0.5, 0.0)).unwrap();
        assert_abs_diff_eq!(orange.x(), 0.5436, epsilon = 1e-3);
        assert_abs_diff_eq!(orange.y(), 0.4066, epsilon = 1e-3);

        assert_abs_diff_eq!(Transfer::Srgb.decode(0.5), 0.214, epsilon = 1e-3);
        assert_abs_diff_eq!(Transfer::Srgb.decode(0.04), 0.04 / 12.92, epsilon = 1e-6);
        assert_abs_diff_eq!(Transfer::Srgb.decode(1.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Transfer::Power(2.2).decode(0.5), 0.2176, epsilon = 1e-4);
        assert_abs_diff_eq!(Transfer::Linear.decode(1.5), 1.0);
        assert_abs_diff_eq!(Transfer::Srgb.decode(f32::NAN), 0.0);
    }

    #[test]
    fn test_white_balanced_profile() {
        let profile = RgbProfile::default();
        let warm = cct_to_xy(2700.0).unwrap();
        let balanced = profile.with_white_point(warm);
        assert_eq!(balanced.gamut().red, profile.gamut().red);
        assert_eq!(balanced.transfer(), profile.transfer());

        let white = balanced.encoded_rgb_to_xy(RGB::new(1.0, 1.0, 1.0)).unwrap();
        assert!(white.distance(warm) < 1e-4);

        let rgb = profile.xy_to_linear_rgb(illuminant::D65).unwrap();
        assert_abs_diff_eq!(rgb.r, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(rgb.g, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(rgb.b, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_cwww_profile_defaults() {
        let profile = CwwwProfile::new(&CwwwProfileConfig::new(6500.0, 2700.0)).unwrap();
        let mid_mired = (1e6 / 6500.0 + 1e6 / 2700.0) / 2.0;
        assert_abs_diff_eq!(profile.white_point().mired(), mid_mired, epsilon = 1e-2);
        assert_abs_diff_eq!(profile.impurity().decay_gamma, 3.0);
        assert_abs_diff_eq!(profile.impurity().green_tint_duv, 0.0);
        assert_abs_diff_eq!(profile.combined_limit().max, 2.0);

        assert_abs_diff_eq!(profile.blend_position(profile.cold_white()), 1.0);
        assert_abs_diff_eq!(profile.blend_position(profile.warm_white()), 0.0);
        assert_abs_diff_eq!(profile.temperature_at(1.0).kelvin(), 6500.0, epsilon = 0.5);
        assert_eq!(profile.neutral_at(0.0), cct_to_xy(2700.0).unwrap());
    }

    #[test]
    fn test_cwww_profile_errors() {
        assert_eq!(
            CwwwProfile::new(&CwwwProfileConfig::new(2700.0, 6500.0)),
            Err(ConfigError::InvertedWhiteRange {
                warm: 6500.0,
                cold: 2700.0
            })
        );
        assert_eq!(
            CwwwProfile::new(&CwwwProfileConfig::new(30_000.0, 2700.0)),
            Err(ConfigError::ColorTemperatureOutOfRange(30_000.0))
        );

        let mut config = CwwwProfileConfig::new(6500.0, 2700.0);
        config.impurity.green_tint_duv = Some(0.9);
        assert_eq!(CwwwProfile::new(&config), Err(ConfigError::DuvOutOfRange(0.9)));

        let mut config = CwwwProfileConfig::new(6500.0, 2700.0);
        config.impurity.red_shift_mired = Some(-5.0);
        assert_eq!(CwwwProfile::new(&config), Err(ConfigError::InvalidMiredShift(-5.0)));

        let mut config = CwwwProfileConfig::new(6500.0, 2700.0);
        config.min_combined = Some(1.2);
        config.max_combined = Some(0.8);
        assert_eq!(
            CwwwProfile::new(&config),
            Err(ConfigError::InvertedIntensityRange { min: 1.2, max: 0.8 })
        );

        let mut config = CwwwProfileConfig::new(6500.0, 2700.0);
        config.warm_white_limits = IntensityLimits::new(0.0, 1.1);
        assert_eq!(CwwwProfile::new(&config), Err(ConfigError::IntensityOutOfRange(1.1)));
    }

    #[test]
    fn test_white_profile() {
        let profile = WhiteProfile::new(&WhiteProfileConfig::new(4000.0)).unwrap();
        assert_eq!(profile.white_xy(), cct_to_xy(4000.0).unwrap());
        assert_abs_diff_eq!(profile.impurity().decay_gamma, 1.5);
        assert_abs_diff_eq!(duv(profile.white_xy()), 0.0, epsilon = 1e-3);

        assert_eq!(
            WhiteProfile::new(&WhiteProfileConfig::new(500.0)),
            Err(ConfigError::ColorTemperatureOutOfRange(500.0))
        );

        let mut config = WhiteProfileConfig::new(4000.0);
        config.impurity = ImpurityConfig {
            decay_gamma: Some(0.0),
            ..ImpurityConfig::NONE
        };
        assert_eq!(WhiteProfile::new(&config), Err(ConfigError::InvalidGamma(0.0)));
    }
}
