const DEFAULT_ROUNDING_MODE: RoundingMode = RoundingMode::HalfEven;