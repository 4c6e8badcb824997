//! Irreducible Fuchsian operators with rational singularities and exponents.
//!
//! The operators in this module were extracted from the dataset used for the
//! experiments described in Chyzak, Goyer, Mezzarobba (2022), Section 7. They
//! were picked at random under constraints on the order, the singular points,
//! and the local exponents at each singular point.
//!
//! Entries are keyed by `(generation, order, degree)` triples. Every operator
//! is monic of the stated order, and the common denominator of its
//! coefficients has degree `order * degree`. For the key `(2, 5, 6)`, clearing
//! denominators gives an operator whose leading coefficient factors as
//!
//! ```text
//! (z - 28/3)^5 (z - 121/16)^5 (z - 65/12)^5 (z - 3/10)^5 (z + 53/10)^5 (z + 53/6)^5
//! ```

use weyl_ore::tables::from_rational_rows;
use weyl_ore::RationalOperator;

/// Numerator and denominator digit strings of one rational coefficient, both
/// ordered by increasing power of `z`.
type Row = (&'static [&'static str], &'static [&'static str]);

/// Keys `(generation, order, degree)` of the operators in the collection.
#[must_use]
pub fn keys() -> &'static [(u32, u32, u32)] {
    &[
        (1, 2, 2),
        (1, 4, 2),
        (2, 3, 3),
        (2, 5, 4),
        (2, 5, 6),
        (3, 3, 5),
        (4, 4, 3),
    ]
}

/// Returns the operator stored under `(generation, order, degree)`, if the
/// collection has one.
#[must_use]
pub fn irred(generation: u32, order: u32, degree: u32) -> Option<RationalOperator> {
    let rows: &[Row] = match (generation, order, degree) {
        (1, 2, 2) => IRRED_1_2_2,
        (1, 4, 2) => IRRED_1_4_2,
        (2, 3, 3) => IRRED_2_3_3,
        (2, 5, 4) => IRRED_2_5_4,
        (2, 5, 6) => IRRED_2_5_6,
        (3, 3, 5) => IRRED_3_3_5,
        (4, 4, 3) => IRRED_4_4_3,
        _ => return None,
    };
    Some(from_rational_rows(rows).expect("stored table must be well formed"))
}

static IRRED_1_2_2: &[Row] = &[
    (
        &[
            "-914731699", "170561664", "7128324"
        ],
        &[
            "91584900", "34643400", "-3614300", "-1303200", "129600"
        ],
    ),
    (
        &[
            "-33686", "-4302"
        ],
        &[
            "-4785", "-905", "180"
        ],
    ),
    (
        &[
            "1"
        ],
        &[
            "1"
        ],
    ),
];

static IRRED_1_4_2: &[Row] = &[
    (
        &[
            "-2245937427043850033919", "1432286768863927980036", "-331614221956180131573",
            "-2796968328358578264", "3761488140623395072"
        ],
        &[
            "1487189808810000", "-21174134321376000", "116275864918737600", "-302696102480290560",
            "363892995858420576", "-164070061344389376", "34161316701057216", "-3371888445716736",
            "128367902961936"
        ],
    ),
    (
        &[
            "12405624767176527", "-5636597753470860", "-121641558287931", "116088953763904"
        ],
        &[
            "119741530500", "-1278631299600", "4745896331940", "-6785971942752", "2572413374124",
            "-375656021136", "19068315948"
        ],
    ),
    (
        &[
            "-1245897126", "5184664947", "-573876259"
        ],
        &[
            "3213675", "-22877640", "44199378", "-12400344", "944163"
        ],
    ),
    (
        &[
            "-250083", "-8789"
        ],
        &[
            "3105", "-11052", "1683"
        ],
    ),
    (
        &[
            "1"
        ],
        &[
            "1"
        ],
    ),
];

static IRRED_2_3_3: &[Row] = &[
    (
        &[
            "6340899106132497425376", "-6637179953341173564900", "1854138529385081693325",
            "-281575459198101293250", "46401236528146447500", "-5580440718303193750",
            "222834891756421875"
        ],
        &[
            "3186831563746253280000", "-2103630734250683352000", "355568864800739475600",
            "44566625258768552940", "-17763039204417936000", "547719056317075500",
            "252513536868450000", "-18599595251737500", "-1149796147500000", "111785736562500"
        ],
    ),
    (
        &[
            "4543644347878027392", "-2237565203895017700", "158868817738775325",
            "48954833592924000", "-5421494604745625"
        ],
        &[
            "357669086840208000", "-157398483670084800", "9287996212071720", "4108179397608000",
            "-470186842554000", "-26281054800000", "3832653825000"
        ],
    ),
    (
        &[
            "18325709424", "-788431755", "-381277225"
        ],
        &[
            "1799463600", "-395942580", "-20196000", "5890500"
        ],
    ),
    (
        &[
            "1"
        ],
        &[
            "1"
        ],
    ),
];

static IRRED_2_5_4: &[Row] = &[
    (
        &[
            "-60499225396935182385758430666053784725524822794240",
            "-80065792010549570600491971728065154640222644736000",
            "-40923805675211589453288563750285621123920294732800",
            "-10580895443546795403721240743668643427794083568000",
            "176878019323523638954796039745304746754374982200",
            "176227717367534240239788147481161963336541639761",
            "-25993269050791222693462053074823540559328262930",
            "3586366021915833158806299268014042249628165560",
            "2123811321547684149325060404422898910430424240",
            "194933639632012349787469798235901468193103280",
            "55688492267012709532563476548505536405692864",
            "14931831935339715568174333544849248872230400",
            "1629607197737960372591827875078540083200000",
            "87027679413114261177317195810335851520000",
            "2745991295001642206167981620243777536000", "43888135231738960167609796858265600000"
        ],
        &[
            "322760803426277747816427489779363630899200000",
            "-2196418794622626059507181392978096186035200000",
            "5282855303922093597736621493658978696948480000",
            "-4346682197741918461257761022574264177370976000",
            "-1601652666551615085397328028988103942240504400",
            "3045508271741071672053605867901046674980136906",
            "740373518089517214271543637198534839225335150",
            "-837797139938820551482435553488991616196873680",
            "-452128819755491433568143743173454071419941700",
            "-64275131332467264207936519989249024121529590",
            "7123080175826440478542240835763247296878550",
            "2759808746819783013358987764173511843264540",
            "102076621309087569294549867223135282702800",
            "-38861498867445089073768889934449007253120",
            "-3405408178752769947709774145165531488800", "248023313692267199967365283786678634944",
            "33530339103525366922930885685028518400", "-676805163641812202803250894152704000",
            "-150606682448162027994638887034880000", "446314067288108704689087283200000",
            "268586687521092245220576460800000"
        ],
    ),
    (
        &[
            "-4372889182868609096239111314940270838536050",
            "-4452741360150523496770216948071050269755000",
            "-2109163819586025959854179321275039195747100",
            "74758072615350661487138424212032151954040",
            "-68711716381058675159445908389938711427137",
            "-22186334011720259897145627274075090089672",
            "3239929125723180040534344616416176412528", "-13525082639479340305106227507024448112",
            "-261124545701604411848530588658345971092", "-34191194664143302286640771358266700160",
            "-2023970487364409457999053493395916800", "-113307167125184244872088961878860800",
            "-1408244176348017185177028920320000"
        ],
        &[
            "358990082558034599608964151999114240000", "-1954370062395004724391316806493834752000",
            "3370708599493843529109864517263175353600",
            "-1090183192697823476192516598959627570880",
            "-1810610014852412041276463562624418487586", "456192197314549777127809491060529197000",
            "652074542662890403790315172596993351364", "158853540455244689875169496047335595160",
            "868311098675445761000163181217108574", "-4391679024198196090448490552970900080",
            "-384992156473889264093748343089997296", "41193301508811067683259192134214080",
            "5857176658968246783973873411083744", "-145315712458960498620639875681280",
            "-34938878778553050650751104102400", "103488355683293516361474048000",
            "77847632102635312149872640000"
        ],
    ),
    (
        &[
            "8080926451869911179294697500462495500", "6536736734973787060215978100497450300",
            "1455436299826856363153253804395728020", "149350570273829052240306182942040927",
            "-18710451747784043548921564638802416", "-7316325084699689719016093175754974",
            "-329248283349614581644685233516262", "35366864727176365869737027313680",
            "-1871760751299048495706176012800", "-402253835580037799210378240000"
        ],
        &[
            "1204195959150245540692093520640000", "-4916802676797802007585931667104000",
            "5134093813469043175883662676944800", "1209000517026597119360184763694580",
            "-2212531796006159252402319810968700", "-947399546294583942949178925074940",
            "-77412420868986074042558470383300", "17155950139255521293341465463640",
            "2580220984203261078474116322000", "-87649371017562372839193653280",
            "-22917007589238825119382124800", "67846387030131238873344000",
            "68048629460345552578560000"
        ],
    ),
    (
        &[
            "16450811126586577150322962140", "4458586592872170141958312920",
            "3430687887998087028160505643", "437905499904253879966481524",
            "57348739278644381535502648", "9004334923464026624912720", "39480875588243076416000"
        ],
        &[
            "44881707461757822111456000", "-122169761330732357416574400",
            "44431165112749165306696140", "52794850945735552025572200",
            "8533907208139565097665820", "-518182310198893164224400", "-148460772555796239498960",
            "439305795325895097600", "660922974556580736000"
        ],
    ),
    (
        &[
            "-6807970887923660", "-6140380543550081", "-414806362828799", "24645979552480"
        ],
        &[
            "179137993834800", "-243810309252510", "-77245433114850", "228462294060",
            "687429943200"
        ],
    ),
    (
        &[
            "1"
        ],
        &[
            "1"
        ],
    ),
];

static IRRED_2_5_6: &[Row] = &[
    (
        &[
            "-34702037287245803422976784945540540609637281732067549910009824505574785203557570075",
            "21183849236156711918837256587734295321531493109255080107056307246562131568107313750",
            "3217210082496068227026286487440148702174283452566073833772306730265630286802115500",
            "-4532516268456881444671627646524125285916819069316127054727635582444868338507885000",
            "371763378142585805466820515342247615578564577539325238549218843560933267175297200",
            "413639639931664661913717169684760245990379500463935227134572628834903417705923808",
            "-138149850594284798121659073800245847318225112655101832249673213874072604803664960",
            "-2436650678687825489153812953885271342494826107433111999153812954866742258832000",
            "5320587951999766816847939794337132161669228614779834580308250784313520624021760",
            "1179412940419675095096459194990511962698145277057938818237560501315841683182080",
            "-410950567918099238850233809548865651332381818984223380399065118884480628145152",
            "-64646052247079978701549176788371073862238401328273148004253858272283414517760",
            "21395365215606868516773104448131873036117191598970850381868750856736406999040",
            "909976155407779426144671348969156350556061367185912804269543273492120576000",
            "-492216116472357807205800651901520699492107820689939262120879990943867125760",
            "2346756292288342786913914602538081499436830984628539409010432887954898944",
            "4484324041321078066689066293667961616167698208929424202465060770529280000",
            "13786322014617093553495688839262406672424029522072784913847872520192000",
            "1139946794760929015098098726866672333260860317955416414415224832000000",
            "-5367063561439336020382187762247501608922702729856326050748463841280000",
            "6425085796080511073532087719492319428606636646513316645425905664000",
            "65204179307964560949247804644939130703867015047091625498362511360000",
            "-4943517621097874961968163167971715772024265865910388382112940032000",
            "160843957999504169182957780358165864441505549047731024966975488000",
            "15878842159232600956279416531888462454645289660596773244108800000",
            "-1711556981257167358660943961493854380165831994675165344563200000"
        ],
        &[
            "2319028457365415709581460905401833033752830213070688965313853123775692800000",
            "-40066274258243420548967284249304845964924214146620243441697483656082227200000",
            "281052460894244050063907778112668259789944237080500453726507334334606213120000",
            "-1012343173032021322820714759389581823508015376021645602010988251055447474176000",
            "1927063836331851101559549154301508604957849494211890461744713035547610293862400",
            "-1715325885796662913472674430695347835546361933571738193772045227960804860002304",
            "337369796019708308882505950640280097322326091646593263411978676667952072294400",
            "278445867232961144547229615378621993633965218320990735195775446351811222568960",
            "-126794492484229520036963422074795165383758698713031438791925041229590805872640",
            "-8758875956425744523347307214292583018536273898777749691573514465746508840960",
            "13172607326276152078861575924256669049783202879119837028215606775384118394880",
            "-1078480038806297722693446286095589130232128778435454845952941484815081799680",
            "-672798515366052206334459588265611478494471508554950722997918113035725045760",
            "120437546983286098648450177286078387701790252942173347344015326631920926720",
            "17379110526359201702798837125919170713908409714104208986186746978054963200",
            "-5617525635290816583753427442875150329816208384662263843056579544296194048",
            "-107990473784591900718455108891391447120501512715062945691718156151685120",
            "149513158592181308655730270357001015972043904379210377684818492338995200",
            "-6916228754051775442704302822230140440344863659572304648153153069383680",
            "-2358639981173758307487990135156022028793151045884885548473376613335040",
            "234992855303269946421635632123516355004488467650477959734342264553472",
            "19754121335987475489774265714312204549392388550368878422403317760000",
            "-3587676338630990384765151864581213384799402669366246353512955904000",
            "-29636395181755004015769604438749928340604537153716194639872000000",
            "29719840320259048002936657985031462364134868295212200047411200000",
            "-974629350257429032244107267352529101572208017127610777600000000",
            "-120836496879060266664702387796640802605158522412523847680000000",
            "8319615677729575183439086343982580359973313917747200000000000",
            "103406270867472244544846871978342745715158837886976000000000",
            "-22021614819297680455585027542146607653241382502400000000000",
            "519428752494490742932718094360214824253359390720000000000"
        ],
    ),
    (
        &[
            "-388071097517798585430870130161305856442539915150489771008864152695",
            "187749938002028739453991746311705923381995225556788785768962128600",
            "49212230692554838263617438095595516789875307271433564209952812840",
            "-52222072933934061057702129518111071764278742354910855233770300640",
            "11112457812946964974476479210607096273510464025608077073260278896",
            "10615767254383484776344206998834323555069981936031440878264120320",
            "-3237555231691775470650174671463380196925217704131319022064037632",
            "-517681023584445900530512597617644126542912712700056016023124992",
            "165610407678721264241040109318670973344212492227267787785123584",
            "25092656919740490884289848422758823435481824851127737760094208",
            "-5612881416903653630120646027424243809633283399502607205963776",
            "-907138337185034657457300293109193654901134869579601258635264",
            "157170824736711889146885451092209710896642072825630182117376",
            "17388956102427859095438322433303704399674850388319569510400",
            "-2935163609060241903287459233437043451241867566050236825600",
            "-158785064762488030567462913700518834911010734070169600000",
            "29945411254467973534757166508835548458582357149614080000",
            "706215589918660855979489135382024567450053294161920000",
            "-150005275536183381844529548193286337409733812551680000",
            "-3803417047856570661383091369316039458300100608000000",
            "521036245868079542239645442824948649664970752000000"
        ],
        &[
            "452661996359636323072220556196159130520935195280233594880000",
            "-6256578571884720474563455827155327829243800939422691229696000",
            "33078350066195905935762193325462086791592574428486517912371200",
            "-81134962938168953596270025612380702618361893070899500290211840",
            "84982428789318175938789064253613383174957329088726400481579008",
            "-17705588849326635643393631190566290212011824959316712257781760",
            "-11644165359112475408542605454239801014889110985455773678534656",
            "4768385190401304751226136279041594515474007825499576870764544",
            "370183740082324528972410232075534260731288737232339401900032",
            "-391592176440181459741211471966414826379958689438057529081856",
            "20349160474003658381980578082260798864654161516819647561728",
            "15748642449231153747743589892267023264509496864340388610048",
            "-1997183774118448443388899822017157189059903177442311798784",
            "-323609510907769734120835812584194796795762142173863084032",
            "69323113717835713711961624438351780098662059518992580608",
            "2394761309683901384356132910218154391516120901214011392",
            "-1265879298491201494467983595848414824415938913482309632",
            "30308671066600432940678362224613593038602067823820800",
            "12482637536789640763530120395889351870901522740019200",
            "-795793866557554794944564047109738312490056417280000",
            "-56152707277658288981077058047717984839212728320000",
            "6383780362084631377023215900731365012799488000000",
            "8421937327768909839122505021080293343232000000",
            "-18465587256237659859115261723365133516800000000",
            "544439919102830266116420493072190668800000000"
        ],
    ),
    (
        &[
            "223864649760312097807101767749471466220511235629185",
            "-82167839593933099911499431801722354136152862768750",
            "-21918377244998160863069183799494910968611942069320",
            "11170125853205024119056722640122174960826359768608",
            "269110712624929497288604629812645050570860646176",
            "-1097502990502246490552626498705068161802477547968",
            "140202857718924018262369373404786637638641722624",
            "30991396791188548655433440466850885639347772416",
            "-4654928501598374372148140815533663982807253760",
            "-425925566835883335355767099081097720627201536",
            "39337236081028039200696445567476074225817600",
            "6728602980027558925980237222783478279987200",
            "-462398619437540465245364797677913677004800",
            "-49933317436012214710964939439108115660800",
            "10324427076269127450956438437201182720000", "-612051226940523129584311228830842880000"
        ],
        &[
            "937051457292884456614066928443353210636288000",
            "-9713764545512201149476460727450861018788147200",
            "34573745616304558247197011575621643533032258560",
            "-45161096585432447272206363982560354021840804096",
            "9106418471846965156647320437717599070640401920",
            "5059288353965785374429601244051420058637584384",
            "-1699218781212162993045571377301772337982119936",
            "-153139365772647315166132372068315121826537472",
            "101053414584623222279252066020215629485817856",
            "-2208371167862206282964315679499280790650880",
            "-2812703173665757400762154893370006678011904",
            "220805995655277560717674604814220154044416",
            "37512485557684305686403452720087864573952",
            "-4807808272930945609517250107542221619200",
            "-180352724044835623060254452437116518400", "44593062523523075425683017359687680000",
            "-582455815717350862498692323082240000", "-153946497214535395419434778624000000",
            "6051950750448565913294733312000000"
        ],
    ),
    (
        &[
            "2377928695823413036816695548892219", "-762208621587711835892072253657660",
            "118709159502187973554538821380836", "72414214947553729513331730338048",
            "-18538013647205533683445279361392", "-1753053890698517839871570697408",
            "465108882635341293309549139392", "22792665869942700841571013120",
            "-3305648457917553664136033280", "-434789329773835743178752000",
            "35056170970573399621632000"
        ],
        &[
            "204187541971302188734225190400", "-1411114043168410296798390147840",
            "2584504629075704917655487861216", "-438066783002485834276994006400",
            "-217103325945909740110961421696", "51125138126663956004482043904",
            "5153305346717529650097867264", "-1813645336239967268370511872",
            "-3765200727574963366373376", "25177003225114181820825600",
            "-963477126879176164147200", "-120088210101257502720000", "7081368654619607040000"
        ],
    ),
    (
        &[
            "41370383855939061", "4892914911799558", "-4948326183852076", "28064493964392",
            "89585591787360", "-5128108531200"
        ],
        &[
            "241535292878880", "-834609791595624", "86646529572240", "40304971055712",
            "-4676947564608", "-381397420800", "44980531200"
        ],
    ),
    (
        &[
            "1"
        ],
        &[
            "1"
        ],
    ),
];

static IRRED_3_3_5: &[Row] = &[
    (
        &[
            "-8670024295507734979387367314900", "-20023104718177006637248729222320",
            "2523223218251925254166023092170", "12416246770727538978764204120859",
            "-3436514987049513841913427774018", "-3180870458747487002695340817081",
            "2505450484359110983431547996570", "-826155207999895832163818812791",
            "158046460793874663922760730966", "-18389563613810827299100150875",
            "1214323652964968262407229084", "-34847198210004251666553504", "3612630465937377271296"
        ],
        &[
            "84264988358975155511950170000", "105950131451442330918186321000",
            "-124551810125977847709358161900", "-81381731516357672782477425330",
            "121727941389987133586763768390", "-20824869529453481354980517400",
            "-35715306059567401841457843960", "29534459320186329611791388700",
            "-11842329693864967921225061460", "3020206887409287886072602840",
            "-526993531541075189435464620", "64117800033505201966052070",
            "-5374736569789980282940050", "296805518829532843570440", "-9737394363136772972640",
            "143931597717088621440"
        ],
    ),
    (
        &[
            "523936206539527555046735", "-1394044793550319515881430", "812508614558115570090512",
            "-151584123526871575963626", "-10700444172772190981212", "7688451401051418251751",
            "-1007721565559420627511", "45859894027452154377", "-244962605945443932"
        ],
        &[
            "10249083020317568427000", "8591086400229176243400", "-11899750655303006826330",
            "-1360052817241898920140", "5862200627940909582330", "-3135724106883297930000",
            "847929913011990138330", "-134497429354272364380", "12685635710012415150",
            "-660520578153355920", "14645054712768480"
        ],
    ),
    (
        &[
            "1606375172887730", "-851516260119981", "149474526562354", "-8601296521971",
            "-37276100316"
        ],
        &[
            "50367182065200", "21109635466920", "-33663219309720", "10766894818680",
            "-1357738101720", "60207507360"
        ],
    ),
    (
        &[
            "1"
        ],
        &[
            "1"
        ],
    ),
];

static IRRED_4_4_3: &[Row] = &[
    (
        &[
            "36959585891499041335544730527712", "-43367858299121997001379196583080",
            "22047940443205483377192041931420", "-6323380727201323628141021864232",
            "1112622460040899341209884074958", "-118685781917169083324382695614",
            "6027729750374375677821936804", "89323443588786794725249395",
            "-17483283827572888736888400"
        ],
        &[
            "160194054796627495844094935040", "-401870462937137059149769605120",
            "453976854359579592885043200000", "-305297941208861119092244070400",
            "136115535491916678212760685440", "-42388134777081857232134265600",
            "9455918973122537925993023040", "-1522970839368971326255521600",
            "175828583426543752660595640", "-14196991050674080962112800",
            "761355391311403516227600", "-24361293304547944224480", "351915282046621533240"
        ],
    ),
    (
        &[
            "34776180106511727325739760", "-22316961365697458203852824",
            "3222997729871087195102772", "1334050468347601932646402", "-632950856064133846487028",
            "96246681870541809327831", "-4944775196347932477070"
        ],
        &[
            "-1140749296416600411340800", "2146303658529110797516800",
            "-1751552688077007546931200", "813426786960396801192000", "-236914340999728269477600",
            "44896840115193463597200", "-5539645199758602933000", "429494309943265967400",
            "-19004545432089617400", "366044603751426600"
        ],
    ),
    (
        &[
            "-2356655368804738543008", "1274479487856801877152", "-231730571492254215098",
            "15988727042629656667", "-322596484080077900"
        ],
        &[
            "74734623717020467200", "-93741424638762700800", "47104852136916974400",
            "-12129907155140174400", "1690882851101043600", "-121241119183984800",
            "3502819174654800"
        ],
    ),
    (
        &[
            "59125377396", "-31637133076", "3348152203"
        ],
        &[
            "-11001070080", "6899452560", "-1303422120", "75315240"
        ],
    ),
    (
        &[
            "1"
        ],
        &[
            "1"
        ],
    ),
];
