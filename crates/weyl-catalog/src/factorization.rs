//! Operators collected around a factorization project.
//!
//! Every operator here is a genuine example from the literature on
//! factoring linear differential operators: lattice Green functions,
//! periods reported by geometers, stress tests for Maple's DFactor,
//! constant-term sequences, and similar. Each constructor reproduces
//! the published coefficients exactly and its documentation records
//! where the example comes from and what makes it interesting.
//!
//! Operators stated as products or least common left multiples in the
//! source material are built that way here, through the operator
//! arithmetic, rather than from pre-expanded rows.

use weyl_ore::tables::from_polynomial_rows;
use weyl_ore::{RationalOperator, WeylOperator};
use weyl_poly::DensePoly;
use weyl_rational_func::RationalFunction;
use weyl_rings::Q;

/// A named catalogue entry.
#[derive(Clone, Debug)]
pub struct OperatorEntry {
    /// Name the operator is known by.
    pub name: String,
    /// The operator itself.
    pub operator: RationalOperator,
    /// Provenance and what makes the example interesting.
    pub notes: String,
}

// Polynomial coefficient with integer entries, as an order-0 operator.
fn p(coeffs: &[i64]) -> WeylOperator {
    WeylOperator::constant(DensePoly::new(coeffs.iter().map(|&v| Q::from(v)).collect()))
}

// Same, with rational entries.
fn pf(coeffs: &[Q]) -> WeylOperator {
    WeylOperator::constant(DensePoly::new(coeffs.to_vec()))
}

fn q(num: i64, den: i64) -> Q {
    Q::new(num, den)
}

/// Annihilator of the face-centered cubic lattice Green function in
/// dimension 3, from Koutschan's data set at `koutschan.de/data/fcc1`.
#[must_use]
pub fn fcc3() -> RationalOperator {
    let (z, dz) = WeylOperator::generators();
    let op = p(&[2]) * p(&[-1, 1]) * z.pow(2) * p(&[3, 1]).pow(2) * dz.pow(3)
        + p(&[3]) * &z * p(&[3, 1]) * p(&[-6, 5, 5]) * dz.pow(2)
        + p(&[6]) * p(&[-3, 3, 12, 4]) * &dz
        + p(&[6]) * z * p(&[2, 1]);
    op.into()
}

/// Annihilator of both sqrt(1+z) and sqrt(1+2z): a Fuchsian operator
/// with linear right factors but no rational solution.
#[must_use]
pub fn sqrt_dop() -> RationalOperator {
    let dz = WeylOperator::dz();
    (p(&[2, 6, 4]) * dz.pow(2) + p(&[3, 4]) * &dz - p(&[1])).into()
}

/// Reported by Emre Sertoz, arising from actual period computations.
/// Fuchsian with linear factors but no rational solution.
#[must_use]
pub fn sertoz_dop() -> RationalOperator {
    let (z, dz) = WeylOperator::generators();
    let t = z * &dz;
    let op = p(&[8, 0, -128]) * t.pow(3)
        + p(&[-24, 0, -256]) * t.pow(2)
        + p(&[10, 0, 32]) * &t
        + p(&[0, 0, 64]);
    op.into()
}

/// The least common left multiple of `2z·Dz - 1` and `2z·Dz - 3`,
/// cleared to primitive integer form. Its differential Galois group
/// consists of homotheties.
#[must_use]
pub fn exact_guessing_dop() -> RationalOperator {
    let dz = RationalOperator::dz();
    let two_z: RationalOperator = p(&[0, 2]).into();
    let lcm = (two_z.clone() * &dz - RationalOperator::one())
        .lclm(&(two_z * &dz - RationalOperator::from(p(&[3]))));
    lcm.numerator().primitive_part().into()
}

/// A product on which Maple's `DEtools[DFactor]` fails, reported by
/// Bruno Salvy. The exponent -972 at the point 3 is the suspected
/// cause. Not Fuchsian.
#[must_use]
pub fn salvy_dop() -> RationalOperator {
    let (z, dz) = WeylOperator::generators();
    let left = z.pow(2) * &dz + p(&[3]);
    let right = p(&[-3, 1]) * &dz + p(&[0, 0, 0, 0, 0, 4]);
    (left * right).into()
}

/// An order-2 operator whose only right factor has degree k; see
/// "Explicit degree bounds for right factors of linear differential
/// operators" by Bostan, Rivoal and Salvy (2020). Not Fuchsian.
#[must_use]
pub fn bostan_dop(k: i64) -> RationalOperator {
    let (z, dz) = WeylOperator::generators();
    (z * dz.pow(2) + p(&[2, -1]) * &dz + p(&[k])).into()
}

/// From section 3.1 of van Hoeij's PhD thesis; its only right factor
/// appears to have degree n^2. Not Fuchsian.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn van_hoeij_dop(n: i64) -> RationalOperator {
    let dz = RationalOperator::dz();
    let drift = RationalOperator::constant(RationalFunction::constant(Q::new(1, n)));
    let pole = RationalOperator::constant(RationalFunction::new(
        DensePoly::constant(Q::from(n)),
        DensePoly::z(),
    ));
    dz.pow(2) - drift * &dz + pole
}

/// The sum of z^i·Dz^i for i up to n. Reducible, but any factorization
/// involves algebraic numbers of degree n!.
#[must_use]
pub fn algebraic_exponents_dop(n: u32) -> RationalOperator {
    let (z, dz) = WeylOperator::generators();
    let mut acc = WeylOperator::zero();
    for i in 0..=n {
        acc = acc + z.pow(i) * dz.pow(i);
    }
    acc.into()
}

/// Annihilator of the Gauss hypergeometric function 2F1(a, b; c; z).
#[must_use]
pub fn hypergeometric_dop(a: Q, b: Q, c: Q) -> RationalOperator {
    let (z, dz) = WeylOperator::generators();
    let sum = a.clone() + b.clone() + Q::from(1);
    let op = z * p(&[1, -1]) * dz.pow(2)
        + WeylOperator::constant(DensePoly::new(vec![c, -sum])) * &dz
        - WeylOperator::constant(DensePoly::constant(a * b));
    op.into()
}

/// Reducible over Q(z), yet admits no factorization in the Weyl
/// algebra Q[z]⟨Dz⟩. Annihilates z, so the reducibility is plain.
#[must_use]
pub fn irreducible_weyl_dop() -> RationalOperator {
    let dz = WeylOperator::dz();
    (dz.pow(2) + p(&[0, 2, -1]) * &dz + p(&[-2, 1])).into()
}

/// Example 3.1 of [Formal Solutions and Factorization of Differential
/// Operators with Power Series Coefficients, van Hoeij, 1997], given
/// there to illustrate the definition of the Newton polygon. Stated in
/// terms of the Euler operator T = z·Dz.
#[must_use]
pub fn newton_dop() -> RationalOperator {
    let (z, dz) = WeylOperator::generators();
    let t = z.clone() * &dz;
    let op = z.pow(6) * t.pow(9)
        + p(&[2]) * z.pow(5) * t.pow(8)
        + p(&[3]) * z.pow(4) * t.pow(7)
        + p(&[2]) * z.pow(3) * t.pow(6)
        + p(&[0, 0, 1, 0, 2]) * t.pow(5)
        + p(&[0, -3, 5]) * t.pow(3)
        + p(&[0, 3]) * t.pow(2)
        + p(&[2, 2]) * &t
        + p(&[0, 7]);
    op.into()
}

/// Presented by van Straten in [Calabi-Yau operators, 2017]; the
/// annihilator of the quintic period series, sum of (5n)!/(n!)^5 z^n.
#[must_use]
pub fn van_straten_dop() -> RationalOperator {
    let (z, dz) = WeylOperator::generators();
    let t = z * &dz;
    let factor = |k: i64| p(&[5]) * &t + p(&[k]);
    (t.pow(4) - p(&[0, 5]) * factor(1) * factor(2) * factor(3) * factor(4)).into()
}

/// Has 0 as its only integer exponent, with multiplicity 1, while the
/// adjoint operator has no power series solution at all: the adjoint's
/// only integer exponent is -1.
#[must_use]
pub fn adjoint_exponent_dop() -> RationalOperator {
    let (z, dz) = WeylOperator::generators();
    (p(&[0, 0, 0, 2]) * dz.pow(2) + p(&[0, 6, 5]) * &dz + z).into()
}

/// The ten operators of orders 1 through 10 annihilating the power
/// series whose n-th coefficient is the constant term of
/// (x1 + 1/x1 + ... + xk + 1/xk)^n. All Fuchsian, and conjectured
/// irreducible for every k by Beukers and Vlasenko (2021).
#[must_use]
pub fn beukers_vlasenko_dops() -> Vec<RationalOperator> {
    BEUKERS_VLASENKO_ROWS
        .iter()
        .map(|rows| from_polynomial_rows(rows).into())
        .collect()
}

/// The first of the two irreducible Fuchsian operators studied by
/// Zagier (2016).
#[must_use]
pub fn zagier_dop_a() -> RationalOperator {
    let dz = WeylOperator::dz();
    let op = p(&[0, 1800]) * p(&[-62, 7]) * p(&[20, 50, 1]) * dz.pow(2)
        + p(&[-446_400, -10_245_600, 124_560, 30_240]) * &dz
        + p(&[-249_550, -139_453, 6_048]);
    op.into()
}

/// The second of the two irreducible Fuchsian operators studied by
/// Zagier (2016).
#[must_use]
pub fn zagier_dop_b() -> RationalOperator {
    let dz = WeylOperator::dz();
    let op = p(&[0, 0, 0, 90_000]) * p(&[310, 2_911]) * p(&[20, 50, 1]) * dz.pow(4)
        + p(&[0, 0, 18_000]) * p(&[142_600, 1_675_710, 5_185_005, 154_283]) * dz.pow(3)
        + p(&[0, 50]) * p(&[37_497_600, 566_777_510, 2_740_219_655, 147_290_778]) * dz.pow(2)
        + p(&[53_568_000, 6_744_696_050, 28_145_233_025, 4_599_496_440]) * &dz
        + p(&[22_459_500, -19_383_210, 250_881_624]);
    op.into()
}

/// Annihilator of the series with general term (6n)!n!/((3n)!(2n)!(2n)!).
/// Irreducible, Fuchsian, and algebraic; see Villegas (2007).
#[must_use]
pub fn simple_chebyshev_dop() -> RationalOperator {
    let dz = WeylOperator::dz();
    (p(&[0, -2, 216]) * dz.pow(2) + p(&[-1, 432]) * &dz + p(&[30])).into()
}

/// The order-8 analogue of [`simple_chebyshev_dop`] for the series
/// with general term (30n)!n!/((15n)!(10n)!(6n)!). Also algebraic.
#[must_use]
pub fn chebyshev_dop() -> RationalOperator {
    from_polynomial_rows(CHEBYSHEV_ROWS).into()
}

/// A product Q*P*P with ord P = ord Q = 2 that DFactor finds
/// irreducible.
#[must_use]
pub fn qpp_dop() -> RationalOperator {
    from_polynomial_rows(QPP_ROWS).into()
}

/// The genuinely irreducible Q*P*P + R, where R is small enough to
/// leave the exponent structure unchanged.
#[must_use]
pub fn qpp_perturbed_dop() -> RationalOperator {
    (from_polynomial_rows(QPP_ROWS) + p(&[0, 384, -576, 192])).into()
}

/// Example 8 of Kauers, Koutschan and Verron (2023). Whether it is
/// algebraic is open.
#[must_use]
pub fn kauers_koutschan_verron_dop() -> RationalOperator {
    let (z, dz) = WeylOperator::generators();
    let cubic = p(&[-2, 1]).pow(3) * p(&[-1, 1]).pow(3) * z.pow(3);
    let quad = pf(&[q(19, 5)])
        * p(&[-2, 1]).pow(2)
        * p(&[-1, 1]).pow(2)
        * z.pow(2)
        * pf(&[q(2_420, 1_197), q(-16_547, 9_576), q(1, 1)]);
    let lin = pf(&[q(99, 80)])
        * p(&[-2, 1])
        * p(&[-1, 1])
        * &z
        * pf(&[
            q(-3_200, 6_237),
            q(7_980_386, 56_133),
            q(-8_566_381, 37_422),
            q(8_816_399, 112_266),
            q(1, 1),
        ]);
    let free = pf(&[
        q(320, 63),
        q(1_144_387, 19_440),
        q(5_167_531, 54_432),
        q(-2_904_319, 30_240),
        q(-20_050_393, 136_080),
        q(5_640_547, 68_040),
        q(-9, 20),
    ]);
    (cubic * dz.pow(3) + quad * dz.pow(2) + lin * &dz + free).into()
}

/// Chyzak's pLQR8 example. Not Fuchsian.
#[must_use]
pub fn chyzak_dop_8() -> RationalOperator {
    from_polynomial_rows(CHYZAK_8_ROWS).into()
}

/// [`chyzak_dop_8`] with every term z^j·Dz^i rewritten as Dz^i·z^j.
/// Van Hoeij's code finds irreducibility very quickly on this variant.
#[must_use]
pub fn chyzak_dop_8_commuted() -> RationalOperator {
    let base = from_polynomial_rows(CHYZAK_8_ROWS);
    let dz = WeylOperator::dz();
    let mut acc = WeylOperator::zero();
    let mut power = WeylOperator::one();
    for coeff in base.coeffs() {
        acc = acc + power.clone() * WeylOperator::constant(coeff.clone());
        power = dz.clone() * power;
    }
    acc.into()
}

/// Chyzak's pLQR12 example. Not Fuchsian; its monodromy can be
/// computed at precision 1e-500 in minutes, but the characteristic
/// polynomial loses too much precision.
#[must_use]
pub fn chyzak_dop_12() -> RationalOperator {
    from_polynomial_rows(CHYZAK_12_ROWS).into()
}

/// All fixed named operators of the catalogue, with provenance notes.
///
/// The parameterized families ([`bostan_dop`], [`van_hoeij_dop`],
/// [`algebraic_exponents_dop`], [`hypergeometric_dop`]) are not
/// enumerated here.
#[must_use]
pub fn named_operators() -> Vec<OperatorEntry> {
    let mut entries = vec![
        OperatorEntry {
            name: "fcc3".to_string(),
            operator: fcc3(),
            notes: "Face-centered cubic lattice Green function, dimension 3 \
                    (Koutschan's data set)."
                .to_string(),
        },
        OperatorEntry {
            name: "sqrt_dop".to_string(),
            operator: sqrt_dop(),
            notes: "Annihilates sqrt(1+z) and sqrt(1+2z); linear factors but no \
                    rational solution."
                .to_string(),
        },
        OperatorEntry {
            name: "sertoz_dop".to_string(),
            operator: sertoz_dop(),
            notes: "From period computations of Emre Sertoz.".to_string(),
        },
        OperatorEntry {
            name: "exact_guessing_dop".to_string(),
            operator: exact_guessing_dop(),
            notes: "lclm(2z·Dz - 1, 2z·Dz - 3); differential Galois group made of \
                    homotheties."
                .to_string(),
        },
        OperatorEntry {
            name: "salvy_dop".to_string(),
            operator: salvy_dop(),
            notes: "DEtools[DFactor] failure case reported by Bruno Salvy; exponent \
                    -972 at the point 3. Not Fuchsian."
                .to_string(),
        },
        OperatorEntry {
            name: "irreducible_weyl_dop".to_string(),
            operator: irreducible_weyl_dop(),
            notes: "Reducible over Q(z) but admits no factorization in the Weyl \
                    algebra; annihilates z."
                .to_string(),
        },
        OperatorEntry {
            name: "newton_dop".to_string(),
            operator: newton_dop(),
            notes: "Newton polygon illustration, van Hoeij 1997, Example 3.1.".to_string(),
        },
        OperatorEntry {
            name: "van_straten_dop".to_string(),
            operator: van_straten_dop(),
            notes: "Calabi-Yau operator of van Straten (2017); quintic periods.".to_string(),
        },
        OperatorEntry {
            name: "adjoint_exponent_dop".to_string(),
            operator: adjoint_exponent_dop(),
            notes: "Only integer exponent 0, while the adjoint has only the integer \
                    exponent -1."
                .to_string(),
        },
        OperatorEntry {
            name: "zagier_dop_a".to_string(),
            operator: zagier_dop_a(),
            notes: "Irreducible Fuchsian operator studied by Zagier (2016).".to_string(),
        },
        OperatorEntry {
            name: "zagier_dop_b".to_string(),
            operator: zagier_dop_b(),
            notes: "Irreducible Fuchsian operator studied by Zagier (2016).".to_string(),
        },
        OperatorEntry {
            name: "simple_chebyshev_dop".to_string(),
            operator: simple_chebyshev_dop(),
            notes: "Annihilates the series of (6n)!n!/((3n)!(2n)!(2n)!); algebraic \
                    (Villegas 2007)."
                .to_string(),
        },
        OperatorEntry {
            name: "chebyshev_dop".to_string(),
            operator: chebyshev_dop(),
            notes: "Annihilates the series of (30n)!n!/((15n)!(10n)!(6n)!); algebraic \
                    (Villegas 2007)."
                .to_string(),
        },
        OperatorEntry {
            name: "qpp_dop".to_string(),
            operator: qpp_dop(),
            notes: "Product Q*P*P with ord P = ord Q = 2, found irreducible by \
                    DFactor."
                .to_string(),
        },
        OperatorEntry {
            name: "qpp_perturbed_dop".to_string(),
            operator: qpp_perturbed_dop(),
            notes: "Q*P*P + R with R small; irreducible with the same exponent \
                    structure."
                .to_string(),
        },
        OperatorEntry {
            name: "kauers_koutschan_verron_dop".to_string(),
            operator: kauers_koutschan_verron_dop(),
            notes: "Example 8 of Kauers, Koutschan, Verron (2023); algebraicity open."
                .to_string(),
        },
        OperatorEntry {
            name: "chyzak_dop_8".to_string(),
            operator: chyzak_dop_8(),
            notes: "Chyzak's pLQR8. Not Fuchsian.".to_string(),
        },
        OperatorEntry {
            name: "chyzak_dop_8_commuted".to_string(),
            operator: chyzak_dop_8_commuted(),
            notes: "pLQR8 with z^j·Dz^i rewritten as Dz^i·z^j; van Hoeij's code \
                    settles it quickly."
                .to_string(),
        },
        OperatorEntry {
            name: "chyzak_dop_12".to_string(),
            operator: chyzak_dop_12(),
            notes: "Chyzak's pLQR12; precision loss pathology in the characteristic \
                    polynomial of the monodromy."
                .to_string(),
        },
    ];

    for (i, operator) in beukers_vlasenko_dops().into_iter().enumerate() {
        let k = i + 1;
        entries.push(OperatorEntry {
            name: format!("beukers_vlasenko_{k}"),
            operator,
            notes: format!(
                "Annihilates the constant-term series of (x1 + 1/x1 + ... + x{k} + 1/x{k})^n; \
                 Fuchsian of order {k}, conjectured irreducible."
            ),
        });
    }

    entries
}

static CHEBYSHEV_ROWS: &[&[i128]] = &[
    &[3_726_543_300_480],
    &[-48, 251_637_206_929_920_000],
    &[0, -181_392, 7_972_406_431_637_760_000],
    &[0, 0, -3_181_944, 33_378_063_480_115_200_000],
    &[0, 0, 0, -8_665_432, 40_810_981_455_014_400_000],
    &[0, 0, 0, 0, -7_118_750, 19_459_527_091_200_000_000],
    &[0, 0, 0, 0, 0, -2_223_250, 4_043_927_462_400_000_000],
    &[0, 0, 0, 0, 0, 0, -275_625, 362_797_056_000_000_000],
    &[0, 0, 0, 0, 0, 0, 0, -11_250, 11_337_408_000_000_000],
];

static QPP_ROWS: &[&[i128]] = &[
    &[
        21_507_932_160, -193_562_337_280, 783_554_180_800, -1_903_574_724_872,
        3_119_697_806_036, -3_640_200_220_578, 3_063_663_869_775, -1_805_014_881_821,
        638_416_965_641, -17_327_453_053, -109_231_891_400, 49_326_035_616, -7_240_679_424,
    ],
    &[
        0, -9_617_080_320, 88_941_614_080, -372_006_341_440, 936_281_683_712,
        -1_590_546_221_216, 1_931_267_337_888, -1_716_854_054_820, 1_113_550_268_696,
        -511_117_695_296, 156_077_341_768, -28_367_498_140, 2_435_213_664, -44_568_576,
    ],
    &[
        0, 0, 1_928_724_480, -18_243_937_280, 78_432_331_584, -203_635_305_344, 357_527_514_720,
        -449_508_602_336, 417_012_130_548, -289_050_926_992, 149_347_936_824, -56_364_214_480,
        14_786_677_716, -2_417_460_448, 185_131_008,
    ],
    &[
        0, 0, 0, -223_150_080, 2_141_675_520, -9_378_210_304, 24_866_254_336, -44_636_499_968,
        57_362_028_416, -54_280_917_984, 38_177_885_376, -19_807_197_440, 7_377_950_144,
        -1_866_288_160, 286_581_760, -20_111_616,
    ],
    &[
        0, 0, 0, 0, 15_790_080, -151_768_576, 666_110_208, -1_768_516_096, 3_167_315_328,
        -4_033_162_720, 3_743_267_280, -2_549_027_888, 1_262_108_832, -442_340_672, 103_973_136,
        -14_691_248, 942_336,
    ],
    &[
        0, 0, 0, 0, 0, -651_264, 6_144_000, -26_409_984, 68_352_000, -118_544_640, 145_038_336,
        -128_274_240, 82_574_976, -38_377_920, 12_552_960, -2_741_952, 359_040, -21_312,
    ],
    &[
        0, 0, 0, 0, 0, 0, 12_288, -110_592, 451_584, -1_105_920, 1_808_640, -2_080_512,
        1_725_888, -1_040_256, 452_160, -138_240, 28_224, -3_456, 192,
    ],
];

static CHYZAK_8_ROWS: &[&[i128]] = &[
    &[2_016_000, -896_240, 116_685, 1_296],
    &[0, -2_374_400, 1_133_040, -165_780],
    &[0, 5_376_000, -1_849_600, -17_820, 74_520],
    &[0, 0, -5_376_000, 2_490_800, -294_660, -19_440],
    &[0, 0, 0, 3_528_000, -1_663_600, 195_840, 2_592],
    &[0, 0, 0, 0, -1_736_000, 730_200, -73_116],
    &[0, 0, 0, 0, 0, 644_000, -222_120, 17_496],
    &[0, 0, 0, 0, 0, 0, -248_800, 64_170, -3_888],
    &[0, 0, 0, 0, 0, 0, -672_000, 248_800, -32_085, 1_296],
];

static CHYZAK_12_ROWS: &[&[i128]] = &[
    &[
        -242_892_071_580_928_573_440, 22_701_827_323_680_325_632, -283_323_135_285_181_440,
        697_951_026_217_824, 248_398_369, 4_096,
    ],
    &[
        -123_157_676_435_039_059_968_000, -2_958_274_941_652_429_701_120,
        137_823_913_299_263_422_464, -1_148_741_029_122_895_872, 2_126_092_481_531_712,
        381_497_456,
    ],
    &[
        23_978_910_615_377_176_166_400_000, -676_730_454_788_951_506_944_000,
        -8_259_771_543_067_023_114_240, 255_781_061_899_193_548_800, -1_601_962_666_488_175_104,
        2_376_272_747_116_176, 198_625_984,
    ],
    &[
        0, 79_929_702_051_257_253_888_000_000, -1_127_233_709_339_754_627_072_000,
        -9_318_275_106_273_660_764_160, 215_867_787_180_707_414_016, -1_083_810_651_335_691_264,
        1_342_311_357_395_808, 47_985_408,
    ],
    &[
        0, 0, 89_920_914_807_664_410_624_000_000, -845_224_841_008_159_653_888_000,
        -5_322_236_663_399_228_375_040, 98_427_354_914_525_552_640, -412_729_363_214_499_456,
        439_042_399_810_752, 5_856_256,
    ],
    &[
        0, 0, 0, 47_957_821_230_754_352_332_800_000, -338_152_972_193_221_312_512_000,
        -1_729_382_001_408_369_229_824, 26_609_265_851_213_979_648, -95_870_207_845_702_656,
        89_429_350_059_090, 348_160,
    ],
    &[
        0, 0, 0, 0, 13_987_697_858_970_019_430_400_000, -78_958_354_168_459_925_913_600,
        -341_451_819_511_938_809_856, 4_498_666_973_572_939_776, -14_219_473_030_174_656,
        11_817_978_434_854, 8_192,
    ],
    &[
        0, 0, 0, 0, 0, 2_397_891_061_537_717_616_640_000, -11_295_000_342_150_355_353_600,
        -42_452_845_749_189_476_352, 489_246_143_695_921_152, -1_378_540_881_648_768,
        1_033_753_455_728,
    ],
    &[
        0, 0, 0, 0, 0, 0, 249_780_318_910_178_918_400_000, -1_010_635_834_250_546_380_800,
        -3_367_273_163_015_356_416, 34_510_550_040_138_240, -87_790_839_893_664, 60_012_393_152,
    ],
    &[
        0, 0, 0, 0, 0, 0, 0, 15_859_067_867_312_947_200_000, -56_320_334_797_366_886_400,
        -168_798_968_881_053_696, 1_559_181_490_122_240, -3_618_236_338_680, 2_274_022_144,
    ],
    &[
        0, 0, 0, 0, 0, 0, 0, 0, 594_715_045_024_235_520_000, -1_885_383_259_041_300_480,
        -5_139_383_740_268_544, 43_264_674_941_184, -92_383_148_256, 53_771_264,
    ],
    &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 12_014_445_354_024_960_000, -34_476_998_739_886_080,
        -86_185_913_352_192, 667_618_599_168, -1_321_445_580, 716_800,
    ],
    &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 100_120_377_950_208_000, -263_183_196_487_680,
        -606_943_051_776, 4_363_520_256, -8_057_595, 4_096,
    ],
];

static BEUKERS_VLASENKO_ROWS: &[&[&[i128]]] = &[
    &[&[0, 4], &[-1, 0, 4]],
    &[&[0, 16], &[-1, 0, 48], &[0, -1, 0, 16]],
    &[
        &[0, 48, 0, -864],
        &[-1, 0, 288, 0, -2_592],
        &[0, -3, 0, 240, 0, -1_296],
        &[0, 0, -1, 0, 40, 0, -144],
    ],
    &[
        &[0, 128, 0, -12_288],
        &[-1, 0, 1_344, 0, -61_440],
        &[0, -7, 0, 2_048, 0, -55_296],
        &[0, 0, -6, 0, 800, 0, -14_336],
        &[0, 0, 0, -1, 0, 80, 0, -1_024],
    ],
    &[
        &[0, 320, 0, -109_440, 0, 1_728_000],
        &[-1, 0, 5_528, 0, -825_600, 0, 8_640_000],
        &[0, -15, 0, 13_608, 0, -1_158_720, 0, 8_640_000],
        &[0, 0, -25, 0, 9_268, 0, -515_520, 0, 2_880_000],
        &[0, 0, 0, -10, 0, 2_100, 0, -82_880, 0, 360_000],
        &[0, 0, 0, 0, -1, 0, 140, 0, -4_144, 0, 14_400],
    ],
    &[
        &[0, 768, 0, -783_360, 0, 53_084_160],
        &[-1, 0, 21_120, 0, -8_432_640, 0, 371_589_120],
        &[0, -31, 0, 78_720, 0, -17_072_640, 0, 530_841_600],
        &[0, 0, -90, 0, 82_880, 0, -11_450_880, 0, 265_420_800],
        &[0, 0, 0, -65, 0, 31_808, 0, -3_075_840, 0, 55_296_000],
        &[0, 0, 0, 0, -15, 0, 4_704, 0, -338_688, 0, 4_866_048],
        &[0, 0, 0, 0, 0, -1, 0, 224, 0, -12_544, 0, 147_456],
    ],
    &[
        &[0, 1_792, 0, -4_935_168, 0, 952_627_200, 0, -14_224_896_000],
        &[-1, 0, 76_960, 0, -73_200_384, 0, 8_929_320_960, 0, -99_574_272_000],
        &[0, -63, 0, 417_888, 0, -203_784_192, 0, 17_261_690_880, 0, -149_361_408_000],
        &[0, 0, -301, 0, 637_488, 0, -191_870_208, 0, 12_003_174_400, 0, -82_978_560_000],
        &[0, 0, 0, -350, 0, 367_920, 0, -76_058_880, 0, 3_670_284_800, 0, -20_744_640_000],
        &[0, 0, 0, 0, -140, 0, 90_384, 0, -13_751_904, 0, 528_711_680, 0, -2_489_356_800],
        &[0, 0, 0, 0, 0, -21, 0, 9_408, 0, -1_105_440, 0, 34_718_208, 0, -138_297_600],
        &[0, 0, 0, 0, 0, 0, -1, 0, 336, 0, -31_584, 0, 826_624, 0, -2_822_400],
    ],
    &[
        &[0, 4_096, 0, -28_606_464, 0, 13_070_499_840, 0, -761_014_517_760],
        &[-1, 0, 271_488, 0, -571_023_360, 0, 159_205_294_080, 0, -6_849_130_659_840],
        &[0, -127, 0, 2_094_976, 0, -2_117_173_248, 0, 401_552_179_200, 0, -13_317_754_060_800],
        &[
            0, 0, -966, 0, 4_449_600, 0, -2_675_785_728, 0, 370_055_577_600, 0,
            -9_766_352_977_920,
        ],
        &[
            0, 0, 0, -1_701, 0, 3_620_160, 0, -1_461_829_632, 0, 154_681_344_000, 0,
            -3_329_438_515_200,
        ],
        &[
            0, 0, 0, 0, -1_050, 0, 1_312_416, 0, -384_334_848, 0, 32_232_701_952, 0,
            -577_102_675_968,
        ],
        &[0, 0, 0, 0, 0, -266, 0, 223_776, 0, -50_110_464, 0, 3_421_896_704, 0, -51_791_265_792],
        &[0, 0, 0, 0, 0, 0, -28, 0, 17_280, 0, -3_075_072, 0, 174_653_440, 0, -2_264_924_160],
        &[0, 0, 0, 0, 0, 0, 0, -1, 0, 480, 0, -69_888, 0, 3_358_720, 0, -37_748_736],
    ],
    &[
        &[
            0, 9_216, 0, -156_432_384, 0, 152_023_080_960, 0, -22_924_354_682_880, 0,
            331_838_373_888_000,
        ],
        &[
            -1, 0, 935_592, 0, -4_133_152_512, 0, 2_355_318_466_560, 0, -258_683_438_039_040, 0,
            2_986_545_364_992_000,
        ],
        &[
            0, -255, 0, 10_089_816, 0, -19_955_195_136, 0, 7_552_421_959_680, 0,
            -633_557_545_205_760, 0, 5_973_090_729_984_000,
        ],
        &[
            0, 0, -3_025, 0, 29_054_476, 0, -32_838_948_864, 0, 8_923_673_318_400, 0,
            -592_052_526_858_240, 0, 4_645_737_234_432_000,
        ],
        &[
            0, 0, 0, -7_770, 0, 32_006_700, 0, -23_679_448_320, 0, 4_872_727_756_800, 0,
            -262_594_912_849_920, 0, 1_742_151_462_912_000,
        ],
        &[
            0, 0, 0, 0, -6_951, 0, 16_052_916, 0, -8_466_726_048, 0, 1_371_240_707_328, 0,
            -61_302_652_637_184, 0, 348_430_292_582_400,
        ],
        &[
            0, 0, 0, 0, 0, -2_646, 0, 3_984_288, 0, -1_587_838_560, 0, 208_388_936_448, 0,
            -7_861_661_079_552, 0, 38_714_476_953_600,
        ],
        &[
            0, 0, 0, 0, 0, 0, -462, 0, 498_696, 0, -156_601_632, 0, 17_038_986_624, 0,
            -550_176_012_288, 0, 2_370_274_099_200,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, -36, 0, 29_700, 0, -7_584_192, 0, 696_769_920, 0,
            -19_486_697_472, 0, 74_071_065_600,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 660, 0, -140_448, 0, 11_059_840, 0, -270_648_576, 0,
            914_457_600,
        ],
    ],
    &[
        &[
            0, 20_480, 0, -819_609_600, 0, 1_580_138_496_000, 0, -512_812_803_686_400, 0,
            27_396_522_639_360_000,
        ],
        &[
            -1, 0, 3_168_192, 0, -28_318_801_920, 0, 30_648_175_165_440, 0,
            -7_121_431_166_976_000, 0, 301_361_749_032_960_000,
        ],
        &[
            0, -511, 0, 47_196_224, 0, -175_131_279_360, 0, 122_558_195_957_760, 0,
            -21_504_803_733_504_000, 0, 739_706_111_262_720_000,
        ],
        &[
            0, 0, -9_330, 0, 180_852_320, 0, -367_154_708_480, 0, 181_267_082_772_480, 0,
            -24_959_281_161_830_400, 0, 712_309_588_623_360_000,
        ],
        &[
            0, 0, 0, -34_105, 0, 262_498_016, 0, -339_239_956_480, 0, 125_309_288_448_000, 0,
            -13_938_763_707_187_200, 0, 335_607_402_332_160_000,
        ],
        &[
            0, 0, 0, 0, -42_525, 0, 174_913_200, 0, -158_120_100_864, 0, 45_579_233_525_760, 0,
            -4_189_825_542_389_760, 0, 86_299_046_313_984_000,
        ],
        &[
            0, 0, 0, 0, 0, -22_827, 0, 59_245_296, 0, -39_924_943_872, 0, 9_269_412_790_272, 0,
            -717_120_208_896_000, 0, 12_785_043_898_368_000,
        ],
        &[
            0, 0, 0, 0, 0, 0, -5_880, 0, 10_682_496, 0, -5_616_568_320, 0, 1_076_366_573_568, 0,
            -71_140_560_076_800, 0, 1_108_906_868_736_000,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, -750, 0, 1_022_736, 0, -434_058_240, 0, 70_018_781_184, 0,
            -4_003_398_942_720, 0, 55_037_657_088_000,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 0, -45, 0, 48_400, 0, -17_022_720, 0, 2_348_544_000, 0,
            -117_405_122_560, 0, 1_434_451_968_000,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 880, 0, -261_888, 0, 31_313_920, 0,
            -1_381_236_736, 0, 15_099_494_400,
        ],
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    use weyl_rings::traits::Field;
    use weyl_series::PowerSeries;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&v| Q::from(v)).collect())
    }

    fn weyl(rows: &[&[i64]]) -> RationalOperator {
        WeylOperator::new(rows.iter().map(|row| poly(row)).collect()).into()
    }

    fn fact(n: i64) -> Q {
        let mut out = Q::from(1);
        for k in 1..=n {
            out = out * Q::from(k);
        }
        out
    }

    fn binom(n: i64, k: i64) -> Q {
        fact(n).field_div(&(fact(k) * fact(n - k)))
    }

    fn annihilates(op: &RationalOperator, coeffs: Vec<Q>) -> bool {
        op.numerator()
            .apply_series(&PowerSeries::from_coeffs(coeffs))
            .is_zero()
    }

    #[test]
    fn test_fcc3_expansion() {
        assert_eq!(
            fcc3(),
            weyl(&[
                &[0, 12, 6],
                &[-18, 18, 72, 24],
                &[0, -54, 27, 60, 15],
                &[0, 0, -18, 6, 10, 2],
            ])
        );
    }

    #[test]
    fn test_sqrt_dop_annihilates_both_square_roots() {
        let op = sqrt_dop();
        assert_eq!(op, weyl(&[&[-1], &[3, 4], &[2, 6, 4]]));

        // (1 + mz)^(1/2) for m = 1, 2
        for m in [1i64, 2] {
            let mut coeffs = vec![Q::from(1)];
            let mut last = Q::from(1);
            for k in 0..17i64 {
                last = last * (q(1, 2) - Q::from(k)) * q(m, k + 1);
                coeffs.push(last.clone());
            }
            assert!(annihilates(&op, coeffs));
        }
    }

    #[test]
    fn test_sertoz_expansion() {
        assert_eq!(
            sertoz_dop(),
            weyl(&[
                &[0, 0, 64],
                &[0, -6, 0, -352],
                &[0, 0, 0, 0, -640],
                &[0, 0, 0, 8, 0, -128],
            ])
        );
    }

    #[test]
    fn test_exact_guessing_is_primitive_lclm() {
        let op = exact_guessing_dop();
        assert_eq!(op, weyl(&[&[3], &[0, -4], &[0, 0, 4]]));

        let dz = RationalOperator::dz();
        let two_z: RationalOperator = p(&[0, 2]).into();
        let first = two_z.clone() * &dz - RationalOperator::one();
        let second = two_z * &dz - RationalOperator::from(p(&[3]));
        assert!(op.right_rem(&first).is_zero());
        assert!(op.right_rem(&second).is_zero());
    }

    #[test]
    fn test_salvy_expansion() {
        assert_eq!(
            salvy_dop(),
            weyl(&[
                &[0, 0, 0, 0, 0, 12, 20],
                &[-9, 3, 1, 0, 0, 0, 0, 4],
                &[0, 0, -3, 1],
            ])
        );
    }

    #[test]
    fn test_bostan_kills_its_polynomial_solution() {
        let op = bostan_dop(3);
        let f = RationalFunction::from_poly(DensePoly::new(vec![
            Q::from(1),
            q(-3, 2),
            q(1, 2),
            q(-1, 24),
        ]));
        assert!(op.apply(&f).is_zero());
    }

    #[test]
    fn test_van_hoeij_coefficients() {
        let op = van_hoeij_dop(2);
        assert_eq!(op.order(), Some(2));
        assert_eq!(op.coeff(2), RationalFunction::one());
        assert_eq!(op.coeff(1), RationalFunction::constant(q(-1, 2)));
        assert_eq!(
            op.coeff(0),
            RationalFunction::new(DensePoly::constant(Q::from(2)), DensePoly::z())
        );
        assert_eq!(op.denominator(), DensePoly::z());
    }

    #[test]
    #[should_panic(expected = "denominator cannot be zero")]
    fn test_van_hoeij_rejects_zero_parameter() {
        let _ = van_hoeij_dop(0);
    }

    #[test]
    fn test_algebraic_exponents_terms() {
        let op = algebraic_exponents_dop(3);
        assert_eq!(op.order(), Some(3));
        for i in 0..=3usize {
            assert_eq!(
                op.coeff(i),
                RationalFunction::from_poly(DensePoly::monomial(Q::from(1), i))
            );
        }
    }

    #[test]
    fn test_hypergeometric_kills_gauss_series() {
        let op = hypergeometric_dop(q(1, 2), q(1, 3), q(5, 4));
        let mut coeffs = vec![Q::from(1)];
        let mut term = Q::from(1);
        for n in 0..17i64 {
            let num = (q(1, 2) + Q::from(n)) * (q(1, 3) + Q::from(n));
            let den = (q(5, 4) + Q::from(n)) * Q::from(n + 1);
            term = term * num.field_div(&den);
            coeffs.push(term.clone());
        }
        assert!(annihilates(&op, coeffs));
    }

    #[test]
    fn test_irreducible_weyl_annihilates_z() {
        assert!(irreducible_weyl_dop().apply(&RationalFunction::z()).is_zero());
    }

    #[test]
    fn test_newton_expansion() {
        assert_eq!(
            newton_dop(),
            weyl(&[
                &[0, 7],
                &[0, 2, 2, 6, 2, 5, 2, 1],
                &[0, 0, 0, -6, 30, 62, 219, 254, 255],
                &[0, 0, 0, 0, -3, 30, 180, 953, 1932, 3025],
                &[0, 0, 0, 0, 0, 0, 10, 130, 1070, 3402, 7770],
                &[0, 0, 0, 0, 0, 0, 0, 1, 30, 422, 2100, 6951],
                &[0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 63, 532, 2646],
                &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 56, 462],
                &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 36],
                &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            ])
        );
    }

    #[test]
    fn test_van_straten_quintic_periods() {
        let op = van_straten_dop();
        assert_eq!(
            op,
            weyl(&[
                &[0, -120],
                &[0, 1, -15_000],
                &[0, 0, 7, -45_000],
                &[0, 0, 0, 6, -25_000],
                &[0, 0, 0, 0, 1, -3_125],
            ])
        );

        let coeffs: Vec<Q> = (0..16i64)
            .map(|n| {
                let f = fact(n);
                let d = f.clone() * f.clone() * f.clone() * f.clone() * f;
                fact(5 * n).field_div(&d)
            })
            .collect();
        assert!(annihilates(&op, coeffs));
    }

    #[test]
    fn test_adjoint_exponent_series() {
        let mut coeffs = vec![Q::from(1)];
        let mut last = Q::from(1);
        for n in 1..16i64 {
            last = last * q(-(2 * n - 1), 6);
            coeffs.push(last.clone());
        }
        assert!(annihilates(&adjoint_exponent_dop(), coeffs));
    }

    fn central_term(n: i64) -> Q {
        if n % 2 == 0 {
            binom(n, n / 2)
        } else {
            Q::from(0)
        }
    }

    // Constant term of (x1 + 1/x1 + ... + xk + 1/xk)^n, built one
    // variable at a time through the binomial convolution.
    fn constant_terms(vars: usize, len: i64) -> Vec<Q> {
        let mut cur: Vec<Q> = (0..len).map(central_term).collect();
        for _ in 1..vars {
            cur = (0..len)
                .map(|n| {
                    let mut acc = Q::from(0);
                    for j in 0..=n {
                        let prev = cur[usize::try_from(j).unwrap()].clone();
                        acc = acc + binom(n, j) * prev * central_term(n - j);
                    }
                    acc
                })
                .collect();
        }
        cur
    }

    #[test]
    fn test_beukers_vlasenko_constant_term_series() {
        let ops = beukers_vlasenko_dops();
        assert_eq!(ops.len(), 10);
        assert_eq!(ops[0], weyl(&[&[0, 4], &[-1, 0, 4]]));
        assert_eq!(ops[1], weyl(&[&[0, 16], &[-1, 0, 48], &[0, -1, 0, 16]]));

        for (i, op) in ops.iter().enumerate() {
            let k = i + 1;
            assert_eq!(op.order(), Some(k));
            let len = 16 + i64::try_from(k).unwrap();
            assert!(annihilates(op, constant_terms(k, len)), "operator {k}");
        }
    }

    #[test]
    fn test_zagier_expansions() {
        assert_eq!(
            zagier_dop_a(),
            weyl(&[
                &[-249_550, -139_453, 6_048],
                &[-446_400, -10_245_600, 124_560, 30_240],
                &[0, -2_232_000, -5_328_000, 518_400, 12_600],
            ])
        );
        assert_eq!(
            zagier_dop_b(),
            weyl(&[
                &[22_459_500, -19_383_210, 250_881_624],
                &[53_568_000, 6_744_696_050, 28_145_233_025, 4_599_496_440],
                &[0, 1_874_880_000, 28_338_875_500, 137_010_982_750, 7_364_538_900],
                &[0, 0, 2_566_800_000, 30_162_780_000, 93_330_090_000, 2_777_094_000],
                &[0, 0, 0, 558_000_000, 6_634_800_000, 13_127_400_000, 261_990_000],
            ])
        );
    }

    #[test]
    fn test_simple_chebyshev_series() {
        let op = simple_chebyshev_dop();
        assert_eq!(op, weyl(&[&[30], &[-1, 432], &[0, -2, 216]]));

        let coeffs: Vec<Q> = (0..16i64)
            .map(|n| {
                let den = fact(3 * n) * fact(2 * n) * fact(2 * n);
                (fact(6 * n) * fact(n)).field_div(&den)
            })
            .collect();
        assert!(annihilates(&op, coeffs));
    }

    #[test]
    fn test_chebyshev_series() {
        let op = chebyshev_dop();
        assert_eq!(op.order(), Some(8));
        assert_eq!(
            op.coeff(8),
            RationalFunction::from_poly(poly(&[
                0,
                0,
                0,
                0,
                0,
                0,
                0,
                -11_250,
                11_337_408_000_000_000,
            ]))
        );
        assert_eq!(
            op.coeff(0),
            RationalFunction::constant(Q::from(3_726_543_300_480_i64))
        );

        let coeffs: Vec<Q> = (0..14i64)
            .map(|n| {
                let den = fact(15 * n) * fact(10 * n) * fact(6 * n);
                (fact(30 * n) * fact(n)).field_div(&den)
            })
            .collect();
        assert!(annihilates(&op, coeffs));
    }

    #[test]
    fn test_qpp_perturbation() {
        let qpp = qpp_dop();
        let perturbed = qpp_perturbed_dop();
        assert_eq!(qpp.order(), Some(6));
        assert_eq!(perturbed.coeff(6), qpp.coeff(6));
        assert_eq!(perturbed.sub(&qpp), weyl(&[&[0, 384, -576, 192]]));

        let trailing = qpp.coeff(0);
        let trailing = trailing.as_polynomial().unwrap();
        assert_eq!(trailing.coeff(3), Q::from(-1_903_574_724_872_i64));

        let trailing = perturbed.coeff(0);
        let trailing = trailing.as_polynomial().unwrap();
        assert_eq!(trailing.coeff(0), Q::from(21_507_932_160_i64));
        assert_eq!(trailing.coeff(1), Q::from(-193_562_336_896_i64));
        assert_eq!(trailing.coeff(2), Q::from(783_554_180_224_i64));
        assert_eq!(trailing.coeff(3), Q::from(-1_903_574_724_680_i64));
    }

    #[test]
    fn test_chyzak_commutation_variant() {
        let plain = chyzak_dop_8();
        let commuted = chyzak_dop_8_commuted();
        assert_eq!(plain.order(), Some(8));
        assert_eq!(commuted.order(), Some(8));
        assert_eq!(commuted.coeff(8), plain.coeff(8));
        assert_eq!(
            plain.coeff(0),
            RationalFunction::from_poly(poly(&[2_016_000, -896_240, 116_685, 1_296]))
        );
        assert_eq!(
            commuted.coeff(0),
            RationalFunction::from_poly(poly(&[-1_071_592_000, 366_756_520, 280_305, 1_296]))
        );
        assert_eq!(
            commuted.coeff(7),
            RationalFunction::from_poly(poly(&[
                0,
                0,
                0,
                0,
                0,
                -32_256_000,
                13_684_000,
                -1_989_270,
                89_424,
            ]))
        );
    }

    #[test]
    fn test_chyzak_dop_12_extremes() {
        let op = chyzak_dop_12();
        assert_eq!(op.order(), Some(12));

        let lead = op.coeff(12);
        let lead = lead.as_polynomial().unwrap();
        assert_eq!(lead.degree(), 15);
        assert_eq!(lead.coeff(15), Q::from(4_096));
        assert_eq!(lead.coeff(10), Q::from(100_120_377_950_208_000_i64));

        let constant = op.coeff(0);
        let constant = constant.as_polynomial().unwrap();
        assert_eq!(constant.coeff(5), Q::from(4_096));
        assert_eq!(constant.coeff(0), Q::from(-242_892_071_580_928_573_440_i128));
    }

    #[test]
    fn test_kauers_expansion() {
        let rows: &[&[(i64, i64)]] = &[
            &[
                (320, 63),
                (1_144_387, 19_440),
                (5_167_531, 54_432),
                (-2_904_319, 30_240),
                (-20_050_393, 136_080),
                (5_640_547, 68_040),
                (-9, 20),
            ],
            &[
                (0, 1),
                (-80, 63),
                (4_011_793, 11_340),
                (-5_518_789, 5_040),
                (110_690_999, 90_720),
                (-60_097, 105),
                (8_479_601, 90_720),
                (99, 80),
            ],
            &[
                (0, 1),
                (0, 1),
                (1_936, 63),
                (-10_661, 90),
                (122_137, 630),
                (-446_183, 2_520),
                (24_313, 252),
                (-74_003, 2_520),
                (19, 5),
            ],
            &[
                (0, 1),
                (0, 1),
                (0, 1),
                (8, 1),
                (-36, 1),
                (66, 1),
                (-63, 1),
                (33, 1),
                (-9, 1),
                (1, 1),
            ],
        ];
        let expected: RationalOperator = WeylOperator::new(
            rows.iter()
                .map(|row| DensePoly::new(row.iter().map(|&(n, d)| q(n, d)).collect()))
                .collect(),
        )
        .into();
        assert_eq!(kauers_koutschan_verron_dop(), expected);
    }

    #[test]
    fn test_named_operators_registry() {
        let entries = named_operators();
        assert_eq!(entries.len(), 29);

        let mut names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 29);

        for entry in &entries {
            assert!(!entry.operator.is_zero(), "{} is zero", entry.name);
            assert!(!entry.notes.is_empty());
        }

        let twelve = entries.iter().find(|e| e.name == "chyzak_dop_12").unwrap();
        assert_eq!(twelve.operator.order(), Some(12));
    }
}
