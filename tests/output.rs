mod tests {
    use approx::assert_abs_diff_eq;
    use xy_light_mixer::chromaticity::illuminant;
    use xy_light_mixer::mixer::mix_cwww;
    use xy_light_mixer::{
        ChannelId, ChannelKind, ChannelSink, CwwwChannels, CwwwProfile, CwwwProfileConfig,
        CwwwXyOutput, MixTarget, RgbChannels, RgbCwwwXyOutput, RgbProfile, RgbProfileConfig,
        RgbXyOutput, RgbwXyOutput, StandardGamut, WhiteProfile, WhiteProfileConfig,
        WhiteXyOutput, XyOutputSlot, XyTarget, cct_to_xy,
    };

    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<(ChannelId, f32)>,
    }

    impl RecordingSink {
        fn level(&self, channel: u8) -> Option<f32> {
            self.writes
                .iter()
                .rev()
                .find(|(id, _)| *id == ChannelId(channel))
                .map(|(_, level)| *level)
        }
    }

    impl ChannelSink for RecordingSink {
        fn set_level(&mut self, channel: ChannelId, level: f32) {
            self.writes.push((channel, level));
        }
    }

    fn rgb_channels() -> RgbChannels {
        RgbChannels::new(ChannelId(0), ChannelId(1), ChannelId(2))
    }

    #[test]
    fn test_channel_kind_names() {
        for kind in ChannelKind::ALL {
            assert_eq!(ChannelKind::parse_from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ChannelKind::parse_from_str("amber"), None);
    }

    #[test]
    fn test_rgb_output_writes_sink() {
        let profile = RgbProfile::standard(StandardGamut::Srgb);
        let output = RgbXyOutput::new(&profile, rgb_channels());
        let mut sink = RecordingSink::default();

        let levels = output.write(&XyTarget::new(profile.gamut().red, 1.0), &mut sink);
        assert_eq!(sink.writes.len(), 3);
        assert_abs_diff_eq!(sink.level(0).unwrap(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(sink.level(1).unwrap(), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(levels.get(ChannelKind::Red).unwrap(), 1.0, epsilon = 1e-5);
        assert_eq!(levels.get(ChannelKind::White), None);
    }

    #[test]
    fn test_unassigned_channels_are_computed() {
        let profile = RgbProfile::standard(StandardGamut::Srgb);
        let channels = RgbChannels {
            red: Some(ChannelId(7)),
            ..RgbChannels::default()
        };
        let output = RgbXyOutput::new(&profile, channels);
        let mut sink = RecordingSink::default();

        let levels = output.write(&XyTarget::new(illuminant::D65, 1.0), &mut sink);
        assert_eq!(sink.writes.len(), 1);
        assert!(levels.get(ChannelKind::Green).unwrap() > 0.0);
        assert_eq!(levels.iter().count(), 3);
    }

    #[test]
    fn test_rgb_output_gamma() {
        let mut config = RgbProfileConfig::standard(StandardGamut::Srgb);
        config.gamma = Some(2.0);
        let profile = RgbProfile::new(&config).unwrap();
        let output = RgbXyOutput::new(&profile, rgb_channels());
        let mut sink = RecordingSink::default();

        output.write(&XyTarget::new(profile.gamut().blue, 0.25), &mut sink);
        assert_abs_diff_eq!(sink.level(2).unwrap(), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_cwww_output_combined_cap() {
        let mut config = CwwwProfileConfig::new(6500.0, 2700.0);
        config.max_combined = Some(0.6);
        let profile = CwwwProfile::new(&config).unwrap();
        let output = CwwwXyOutput::new(&profile, CwwwChannels::new(ChannelId(0), ChannelId(1)));
        let mut sink = RecordingSink::default();

        let xy = cct_to_xy(3815.0).unwrap();
        let levels = output.write(&XyTarget::new(xy, 0.9), &mut sink);
        let cold = levels.get(ChannelKind::ColdWhite).unwrap();
        let warm = levels.get(ChannelKind::WarmWhite).unwrap();
        assert_abs_diff_eq!(cold + warm, 0.6, epsilon = 1e-5);

        let mix = mix_cwww(&profile, MixTarget::Xy(xy), 0.9);
        assert_abs_diff_eq!(cold / warm, mix.cold / mix.warm, epsilon = 1e-4);
        assert_eq!(sink.level(0), Some(cold));
    }

    #[test]
    fn test_cwww_output_endpoints() {
        let profile = CwwwProfile::new(&CwwwProfileConfig::new(6500.0, 2700.0)).unwrap();
        let output = CwwwXyOutput::new(&profile, CwwwChannels::new(ChannelId(0), ChannelId(1)));
        let mut sink = RecordingSink::default();

        let levels = output.write(&XyTarget::new(cct_to_xy(2000.0).unwrap(), 0.8), &mut sink);
        assert_abs_diff_eq!(levels.get(ChannelKind::WarmWhite).unwrap(), 0.8, epsilon = 1e-5);
        assert_abs_diff_eq!(levels.get(ChannelKind::ColdWhite).unwrap(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_white_output_ignores_chromaticity() {
        let profile = WhiteProfile::new(&WhiteProfileConfig::new(4000.0)).unwrap();
        let output = WhiteXyOutput::new(&profile, Some(ChannelId(3)));
        let mut sink = RecordingSink::default();

        output.write(&XyTarget::new(illuminant::A, 0.4), &mut sink);
        output.write(&XyTarget::new(illuminant::D65, 0.4), &mut sink);
        assert_eq!(sink.writes, vec![(ChannelId(3), 0.4), (ChannelId(3), 0.4)]);
    }

    #[test]
    fn test_rgbw_output_routes_white() {
        let rgb = RgbProfile::standard(StandardGamut::Srgb);
        let white = WhiteProfile::new(&WhiteProfileConfig::new(5000.0)).unwrap();
        let output = RgbwXyOutput::new(&rgb, &white, rgb_channels(), Some(ChannelId(3)));
        let mut sink = RecordingSink::default();

        let levels = output.write(&XyTarget::new(white.white_xy(), 1.0), &mut sink);
        assert_eq!(sink.writes.len(), 4);
        assert_abs_diff_eq!(sink.level(3).unwrap(), 1.0, epsilon = 1e-4);
        assert!(levels.get(ChannelKind::Red).unwrap() < 1e-3);
    }

    #[test]
    fn test_zero_brightness_turns_every_output_off() {
        let rgb = RgbProfile::standard(StandardGamut::Srgb);
        let white = WhiteProfile::new(&WhiteProfileConfig::new(4000.0)).unwrap();
        let cwww = CwwwProfile::new(&CwwwProfileConfig::new(6500.0, 2700.0)).unwrap();
        let cwww_channels = CwwwChannels::new(ChannelId(4), ChannelId(5));

        let outputs: [XyOutputSlot<'_>; 5] = [
            RgbXyOutput::new(&rgb, rgb_channels()).into(),
            RgbwXyOutput::new(&rgb, &white, rgb_channels(), Some(ChannelId(3))).into(),
            RgbCwwwXyOutput::new(&rgb, &cwww, rgb_channels(), cwww_channels).into(),
            CwwwXyOutput::new(&cwww, cwww_channels).into(),
            WhiteXyOutput::new(&white, Some(ChannelId(3))).into(),
        ];

        let target = XyTarget::new(illuminant::D65, 0.0);
        for output in &outputs {
            let mut sink = RecordingSink::default();
            let levels = output.write(&target, &mut sink);
            assert_abs_diff_eq!(levels.total(), 0.0);
            assert!(sink.writes.iter().all(|(_, level)| *level == 0.0));
            assert!(!sink.writes.is_empty());
        }
    }

    #[test]
    fn test_rgb_cwww_output_levels() {
        let rgb = RgbProfile::standard(StandardGamut::Srgb);
        let cwww = CwwwProfile::new(&CwwwProfileConfig::new(6500.0, 2700.0)).unwrap();
        let output = RgbCwwwXyOutput::new(
            &rgb,
            &cwww,
            rgb_channels(),
            CwwwChannels::new(ChannelId(3), ChannelId(4)),
        )
        .with_calibration_logging(true);
        let mut sink = RecordingSink::default();

        let levels = output.write(&XyTarget::new(rgb.gamut().green, 1.0), &mut sink);
        assert_eq!(levels.iter().count(), 5);
        assert_abs_diff_eq!(levels.get(ChannelKind::Green).unwrap(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(sink.level(3).unwrap(), 0.0, epsilon = 1e-5);
    }
}
