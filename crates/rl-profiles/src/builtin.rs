//! Built-in reference curves: times in minutes, temperatures in °C.

pub(crate) struct BuiltinProfile {
    pub id: &'static str,
    pub longname: &'static str,
    pub points: &'static [(f64, f64)],
}

const NSR_POINTS: &[(f64, f64)] = &[
    (0.0, 195.0), (0.5, 86.0), (1.0, 70.0), (1.5, 75.0), (2.0, 83.0),
    (2.5, 90.0), (3.0, 98.0), (3.5, 104.0), (4.0, 110.0), (4.5, 116.0),
    (5.0, 121.0), (5.5, 125.0), (6.0, 130.0), (6.5, 133.0), (7.0, 138.0),
    (7.5, 142.0), (8.0, 146.0), (8.5, 150.0), (9.0, 154.0), (9.5, 158.0),
    (10.0, 162.0), (10.5, 166.0), (11.0, 169.0), (11.5, 173.0), (12.0, 176.0),
    (12.5, 179.0), (13.0, 182.0), (13.5, 185.0), (14.0, 187.0), (14.5, 190.0),
    (15.0, 192.0), (15.5, 193.0), (16.0, 195.0), (16.5, 197.0), (17.0, 199.0),
    (17.5, 201.0), (18.0, 204.0), (18.5, 207.0), (19.0, 208.0),
];

const BS_POINTS: &[(f64, f64)] = &[
    (0.0, 195.0), (0.5, 86.0), (1.0, 71.0), (1.5, 75.0), (2.0, 84.0),
    (2.5, 92.0), (3.0, 99.0), (3.5, 105.0), (4.0, 111.0), (4.5, 117.0),
    (5.0, 122.0), (5.5, 127.0), (6.0, 132.0), (6.5, 136.0), (7.0, 141.0),
    (7.5, 145.0), (8.0, 149.0), (8.5, 153.0), (9.0, 157.0), (9.5, 161.0),
    (10.0, 165.0), (10.5, 168.0), (11.0, 171.0), (11.5, 174.0), (12.0, 177.0),
    (12.5, 180.0), (13.0, 183.0), (13.5, 186.0), (14.0, 189.0), (14.5, 191.0),
    (15.0, 193.0), (15.5, 195.0), (16.0, 197.0), (16.5, 199.0), (17.0, 201.0),
    (17.5, 204.0), (18.0, 207.0), (18.5, 210.0),
];

const BRM_POINTS: &[(f64, f64)] = &[
    (0.0, 213.0), (0.5, 91.0), (1.0, 70.0), (1.5, 74.0), (2.0, 85.0),
    (2.5, 96.0), (3.0, 106.0), (3.5, 116.0), (4.0, 125.0), (4.5, 133.0),
    (5.0, 140.0), (5.5, 146.0), (6.0, 151.0), (6.5, 156.0), (7.0, 160.0),
    (7.5, 163.0), (8.5, 170.0), (9.0, 173.0), (9.5, 177.0), (10.0, 180.0),
    (10.5, 184.0), (11.0, 187.0), (11.5, 191.0), (12.0, 195.0), (12.5, 199.0),
    (13.0, 203.0), (13.5, 207.0), (14.0, 210.0), (14.5, 214.0), (15.0, 218.0),
    (15.5, 222.0), (15.8, 225.0),
];

const MM_POINTS: &[(f64, f64)] = &[
    (0.0, 213.0), (0.5, 90.0), (1.0, 70.0), (1.5, 74.0), (2.0, 82.0),
    (2.5, 93.0), (3.0, 103.0), (3.5, 113.0), (4.0, 121.0), (4.5, 129.0),
    (5.0, 138.0), (5.5, 142.0), (6.0, 148.0), (6.5, 153.0), (7.0, 157.0),
    (7.5, 160.0), (8.0, 164.0), (8.5, 167.0), (9.0, 170.0), (9.5, 174.0),
    (10.0, 177.0), (10.5, 180.0), (11.0, 183.0), (11.5, 186.0), (12.0, 190.0),
    (12.5, 194.0), (13.0, 198.0), (13.5, 201.0), (14.0, 204.0), (14.5, 206.0),
    (15.0, 209.0), (15.5, 212.0),
];

const S_POINTS: &[(f64, f64)] = &[
    (0.0, 195.0), (0.5, 86.0), (1.0, 69.0), (1.5, 74.0), (2.0, 82.0),
    (2.5, 90.0), (3.0, 98.0), (3.5, 105.0), (4.0, 112.0), (4.5, 119.0),
    (5.0, 125.0), (5.5, 130.0), (6.0, 136.0), (6.5, 141.0), (7.0, 146.0),
    (7.5, 151.0), (8.0, 155.0), (8.5, 160.0), (9.0, 164.0), (9.5, 169.0),
    (10.0, 173.0), (10.5, 178.0), (11.0, 182.0), (11.5, 186.0), (12.0, 190.0),
    (12.5, 194.0), (13.0, 196.0), (13.5, 197.0), (14.0, 198.0), (14.5, 200.0),
    (15.0, 203.0), (15.1, 204.0),
];

const KR_POINTS: &[(f64, f64)] = &[
    (0.0, 195.0), (0.5, 86.0), (1.0, 70.0), (1.5, 75.0), (2.0, 83.0),
    (2.5, 90.0), (3.0, 98.0), (3.5, 105.0), (4.0, 111.0), (4.5, 117.0),
    (5.0, 122.0), (5.5, 127.0), (6.0, 132.0), (6.5, 136.0), (7.0, 140.0),
    (7.5, 144.0), (8.0, 148.0), (8.5, 152.0), (9.0, 155.0), (9.5, 159.0),
    (10.0, 163.0), (10.5, 167.0), (11.0, 171.0), (11.5, 174.0), (12.0, 176.0),
    (12.5, 179.0), (13.0, 182.0), (13.5, 185.0), (14.0, 188.0), (14.5, 190.0),
    (15.0, 192.0), (15.5, 194.0), (16.0, 197.0), (16.5, 199.0), (17.0, 201.0),
    (17.5, 204.0), (18.0, 207.0), (18.5, 210.0), (19.0, 213.0), (19.5, 214.0),
];

const OU_POINTS: &[(f64, f64)] = &[
    (0.0, 195.0), (0.5, 82.0), (1.0, 70.0), (1.5, 76.0), (2.0, 85.0),
    (2.5, 94.0), (3.0, 102.0), (3.5, 109.0), (4.0, 116.0), (4.5, 122.0),
    (5.0, 127.0), (5.5, 132.0), (6.0, 137.0), (6.5, 142.0), (7.0, 146.0),
    (7.5, 150.0), (8.0, 155.0), (8.5, 159.0), (9.0, 163.0), (9.5, 167.0),
    (10.0, 171.0), (10.5, 175.0), (11.0, 179.0), (11.5, 182.0), (12.0, 186.0),
    (12.5, 189.0), (13.0, 193.0), (13.5, 197.0), (14.0, 199.0), (14.5, 201.0),
    (15.0, 203.0), (15.5, 204.0),
];

const CPE_POINTS: &[(f64, f64)] = &[
    (0.0, 213.0), (0.5, 91.0), (1.0, 70.0), (1.5, 74.0), (2.0, 85.0),
    (2.5, 96.0), (3.0, 106.0), (3.5, 116.0), (4.0, 125.0), (4.5, 133.0),
    (5.0, 140.0), (5.5, 146.0), (6.0, 151.0), (6.5, 156.0), (7.0, 160.0),
    (7.5, 163.0), (8.5, 170.0), (9.0, 173.0), (9.5, 177.0), (10.0, 180.0),
    (10.5, 184.0), (11.0, 187.0), (11.5, 191.0), (12.0, 195.0), (12.5, 199.0),
    (13.0, 203.0), (13.5, 207.0), (14.0, 210.0), (14.5, 214.0), (15.0, 218.0),
    (15.5, 222.0), (15.9, 225.0),
];

const TR_POINTS: &[(f64, f64)] = &[
    (0.0, 195.0), (0.5, 88.0), (1.0, 72.0), (1.5, 76.0), (2.0, 85.0),
    (2.5, 93.0), (3.0, 100.0), (3.5, 107.0), (4.0, 114.0), (4.5, 119.0),
    (5.0, 125.0), (5.5, 130.0), (6.0, 135.0), (6.5, 140.0), (7.0, 144.0),
    (7.5, 148.0), (8.0, 152.0), (8.5, 156.0), (9.0, 160.0), (9.5, 164.0),
    (10.0, 168.0), (10.5, 173.0), (11.0, 176.0), (11.5, 179.0), (12.0, 183.0),
    (12.5, 186.0), (13.0, 189.0), (13.5, 193.0), (14.0, 196.0), (14.5, 199.0),
    (15.0, 201.0), (15.5, 204.0), (16.0, 206.0), (16.5, 208.0), (17.0, 212.0),
];

pub(crate) const BUILTIN_PROFILES: [BuiltinProfile; 9] = [
    BuiltinProfile {
        id: "nsr",
        longname: "Nicaragua San Ramon",
        points: NSR_POINTS,
    },
    BuiltinProfile {
        id: "bs",
        longname: "Brasilien Santos",
        points: BS_POINTS,
    },
    BuiltinProfile {
        id: "brm",
        longname: "Brasilien Rio Minas",
        points: BRM_POINTS,
    },
    BuiltinProfile {
        id: "mm",
        longname: "Monsooned Malabar",
        points: MM_POINTS,
    },
    BuiltinProfile {
        id: "s",
        longname: "Sidamo",
        points: S_POINTS,
    },
    BuiltinProfile {
        id: "kr",
        longname: "Kapi Robusta",
        points: KR_POINTS,
    },
    BuiltinProfile {
        id: "ou",
        longname: "Orang Utan",
        points: OU_POINTS,
    },
    BuiltinProfile {
        id: "cpe",
        longname: "Cerro Prieto Estate",
        points: CPE_POINTS,
    },
    BuiltinProfile {
        id: "tr",
        longname: "Tanzania Robusta",
        points: TR_POINTS,
    },
];
